// SPDX-License-Identifier: MPL-2.0
//! Playback state machines and their value types.
//!
//! - [`slideshow`]: slideshow states and the validated interval
//! - [`video`]: video playback states

pub mod slideshow;
pub mod video;

pub use slideshow::{interval_bounds, SlideshowInterval, SlideshowState};
pub use video::VideoState;

/// Monotonic token attached to scheduled ticks.
///
/// A driver bumps its generation whenever previously scheduled work must be
/// discarded; ticks carrying an older generation are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn new() -> Self {
        Self(0)
    }

    /// Returns the following generation.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
