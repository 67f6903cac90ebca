// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::sync::Arc;

/// The two kinds of collections a manifest can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Still pictures (`<picture>` entries).
    Image,
    /// Video clips (`<video>` entries).
    Video,
}

impl MediaKind {
    /// Name of the manifest element that describes one entry of this kind.
    #[must_use]
    pub fn entry_element(self) -> &'static str {
        match self {
            Self::Image => "picture",
            Self::Video => "video",
        }
    }

    /// Name of the entry child element holding the asset path.
    #[must_use]
    pub fn path_element(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "source",
        }
    }

    /// Collection title used when the manifest does not provide one.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Image => "Image Viewer",
            Self::Video => "Video Viewer",
        }
    }
}

/// Raw image data without presentation dependencies.
///
/// This is the domain representation of a bitmap, containing only the
/// pure pixel data. The GUI adapter converts it to framework-specific
/// handles (e.g., `iced::widget::image::Handle`).
///
/// Cloning is cheap: the pixel buffer is shared, so the display controller
/// can keep the current bitmap while the toolkit holds another reference.
///
/// # Example
///
/// ```
/// use lantern::domain::media::RawImage;
/// use std::sync::Arc;
///
/// let pixels = vec![255u8; 100 * 100 * 4]; // 100x100 RGBA
/// let image = RawImage::new(100, 100, Arc::new(pixels));
///
/// assert_eq!(image.width(), 100);
/// assert_eq!(image.height(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct RawImage {
    width: u32,
    height: u32,
    /// RGBA pixel data (4 bytes per pixel).
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Creates a new `RawImage` from dimensions and RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates a new `RawImage` from dimensions and owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        Self::new(width, height, Arc::new(rgba_bytes))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns true when both images share the same pixel buffer.
    #[must_use]
    pub fn shares_buffer_with(&self, other: &RawImage) -> bool {
        Arc::ptr_eq(&self.rgba_bytes, &other.rgba_bytes)
    }
}

impl PartialEq for RawImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for RawImage {}

/// Stream properties reported when a video is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    /// Video width in pixels.
    pub width: u32,
    /// Video height in pixels.
    pub height: u32,
    /// Frames per second, as advertised by the container.
    pub fps: f64,
}

impl VideoMetadata {
    #[must_use]
    pub fn new(width: u32, height: u32, fps: f64) -> Self {
        Self { width, height, fps }
    }
}
