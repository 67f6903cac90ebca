// SPDX-License-Identifier: MPL-2.0
//! Slideshow states and interval.

use std::time::Duration;

// =============================================================================
// SlideshowState
// =============================================================================

/// Lifecycle of one slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideshowState {
    /// Created but not started.
    #[default]
    Idle,
    /// Showing slides, a timer is armed.
    Displaying,
    /// Stopped by the user. Terminal.
    Stopped,
}

impl SlideshowState {
    #[must_use]
    pub fn is_displaying(self) -> bool {
        matches!(self, Self::Displaying)
    }

    #[must_use]
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }
}

// =============================================================================
// SlideshowInterval
// =============================================================================

/// Slideshow interval bounds, in whole seconds.
pub mod interval_bounds {
    /// Shortest accepted interval.
    pub const MIN: u32 = 1;
    /// Longest accepted interval.
    pub const MAX: u32 = 60;
    /// Interval used when the input is rejected or the prompt is cancelled.
    pub const DEFAULT: u32 = 3;
}

/// Time each slide stays on screen, guaranteed to be within 1–60 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowInterval(u32);

impl SlideshowInterval {
    /// Creates an interval, returning `None` when out of range.
    #[must_use]
    pub fn new(seconds: u32) -> Option<Self> {
        (interval_bounds::MIN..=interval_bounds::MAX)
            .contains(&seconds)
            .then_some(Self(seconds))
    }

    /// Creates an interval, clamping to valid range.
    #[must_use]
    pub fn clamped(seconds: u32) -> Self {
        Self(seconds.clamp(interval_bounds::MIN, interval_bounds::MAX))
    }

    #[must_use]
    pub fn seconds(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for SlideshowInterval {
    fn default() -> Self {
        Self(interval_bounds::DEFAULT)
    }
}
