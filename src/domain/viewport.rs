// SPDX-License-Identifier: MPL-2.0
//! Viewport geometry and fit-to-viewport scaling.

/// On-screen area available for the current item, excluding reserved bars.
///
/// Both dimensions are always at least 1 pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Creates a viewport, raising zero dimensions to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Builds the viewport from a raw window area minus the height reserved
    /// for the metadata and navigation bars.
    #[must_use]
    pub fn from_area(width: u32, height: u32, reserved_height: u32) -> Self {
        Self::new(width, height.saturating_sub(reserved_height))
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Scale factor that fits an asset inside the viewport without upscaling.
    ///
    /// Zero-sized assets report `1.0`.
    #[must_use]
    pub fn scale_for(self, asset_width: u32, asset_height: u32) -> f64 {
        if asset_width == 0 || asset_height == 0 {
            return 1.0;
        }
        let width_ratio = f64::from(self.width) / f64::from(asset_width);
        let height_ratio = f64::from(self.height) / f64::from(asset_height);
        width_ratio.min(height_ratio).min(1.0)
    }

    /// Target dimensions of an asset once fitted, each at least 1 pixel.
    #[must_use]
    pub fn fit(self, asset_width: u32, asset_height: u32) -> (u32, u32) {
        let scale = self.scale_for(asset_width, asset_height);
        (scaled(asset_width, scale), scaled(asset_height, scale))
    }
}

// Rounded product is bounded by the original dimension since scale <= 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled(dimension: u32, scale: f64) -> u32 {
    ((f64::from(dimension) * scale).round() as u32).max(1)
}
