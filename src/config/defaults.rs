// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and bounds for configuration.
//!
//! # Categories
//!
//! - **Display**: Heights reserved under the viewport
//! - **Slideshow**: Interval and fullscreen reserved height
//! - **Video**: Frame pull delay and restart grace

use crate::domain::playback::interval_bounds;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Height of the metadata bar under the viewport, in pixels.
pub const DEFAULT_METADATA_BAR_HEIGHT: u32 = 90;

/// Height of the navigation button bar, in pixels.
pub const DEFAULT_NAVIGATION_BAR_HEIGHT: u32 = 50;

/// Largest height either bar may reserve.
pub const MAX_BAR_HEIGHT: u32 = 400;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Interval used when the prompt is cancelled or its input is rejected.
pub const DEFAULT_SLIDESHOW_INTERVAL_SECS: u32 = interval_bounds::DEFAULT;

/// Height reserved for metadata in the fullscreen slideshow, in pixels.
pub const DEFAULT_SLIDESHOW_RESERVED_HEIGHT: u32 = 200;

/// Largest reserved height for the fullscreen slideshow.
pub const MAX_SLIDESHOW_RESERVED_HEIGHT: u32 = 1000;

// ==========================================================================
// Video Defaults
// ==========================================================================

/// Pause between two frame pulls, in milliseconds.
pub const DEFAULT_FRAME_DELAY_MS: u64 = 5;

/// Shortest frame delay.
pub const MIN_FRAME_DELAY_MS: u64 = 1;

/// Longest frame delay.
pub const MAX_FRAME_DELAY_MS: u64 = 1000;

/// Pause between aborting a video and starting the next, in milliseconds.
pub const DEFAULT_RESTART_GRACE_MS: u64 = 15;

/// Longest restart grace.
pub const MAX_RESTART_GRACE_MS: u64 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_within_bounds() {
        assert!(DEFAULT_METADATA_BAR_HEIGHT <= MAX_BAR_HEIGHT);
        assert!(DEFAULT_NAVIGATION_BAR_HEIGHT <= MAX_BAR_HEIGHT);
        assert!(DEFAULT_SLIDESHOW_RESERVED_HEIGHT <= MAX_SLIDESHOW_RESERVED_HEIGHT);
        assert!((MIN_FRAME_DELAY_MS..=MAX_FRAME_DELAY_MS).contains(&DEFAULT_FRAME_DELAY_MS));
        assert!(DEFAULT_RESTART_GRACE_MS <= MAX_RESTART_GRACE_MS);
        assert_eq!(DEFAULT_SLIDESHOW_INTERVAL_SECS, 3);
    }
}
