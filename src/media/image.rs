// SPDX-License-Identifier: MPL-2.0
//! Image loading and fit-to-viewport resizing.

use crate::domain::media::RawImage;
use crate::domain::viewport::Viewport;
use crate::error::AssetLoadError;
use image_rs::imageops::FilterType;
use image_rs::{ImageError, RgbaImage};
use std::fs;
use std::path::Path;

/// Load an image from the given path and decode it to RGBA.
///
/// # Errors
///
/// Returns:
/// - [`AssetLoadError::Io`] if the file cannot be read
/// - [`AssetLoadError::UnsupportedCodec`] if the format is not supported
/// - [`AssetLoadError::Decode`] if the data is corrupt
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RawImage, AssetLoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| AssetLoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let img = image_rs::load_from_memory(&bytes).map_err(|e| map_image_error(path, e))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(RawImage::from_rgba(width, height, rgba.into_vec()))
}

/// Returns `image` scaled down to fit `viewport`.
///
/// Images that already fit are returned as-is, sharing their buffer.
#[must_use]
pub fn resize_to_fit(image: &RawImage, viewport: Viewport) -> RawImage {
    let (width, height) = viewport.fit(image.width(), image.height());
    if width == image.width() && height == image.height() {
        return image.clone();
    }

    let Some(buffer) =
        RgbaImage::from_raw(image.width(), image.height(), image.rgba_bytes().to_vec())
    else {
        return image.clone();
    };
    let resized = image_rs::imageops::resize(&buffer, width, height, FilterType::Triangle);
    RawImage::from_rgba(width, height, resized.into_vec())
}

fn map_image_error(path: &Path, err: ImageError) -> AssetLoadError {
    let path = path.to_path_buf();
    match err {
        ImageError::IoError(e) => AssetLoadError::Io {
            path,
            message: e.to_string(),
        },
        ImageError::Unsupported(e) => AssetLoadError::UnsupportedCodec {
            path,
            codec: e.to_string(),
        },
        other => AssetLoadError::Decode {
            path,
            message: other.to_string(),
        },
    }
}
