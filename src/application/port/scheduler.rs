// SPDX-License-Identifier: MPL-2.0
//! Timer port definition.
//!
//! Playback drivers never sleep or spawn; they ask the [`Scheduler`] to
//! deliver a [`Tick`] later. The GUI adapter turns each request into a
//! timer task that reports the tick back to the update loop.

use crate::domain::playback::Generation;
use std::time::Duration;

/// What a tick asks its driver to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Advance the slideshow to its next slide.
    SlideAdvance,
    /// Pull the next frame of the playing video.
    FramePull,
    /// Start the pending video after the navigation grace delay.
    VideoStart,
}

/// A scheduled callback, stamped with the driver generation that armed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub kind: TickKind,
    pub generation: Generation,
}

impl Tick {
    #[must_use]
    pub fn new(kind: TickKind, generation: Generation) -> Self {
        Self { kind, generation }
    }
}

/// Port for one-shot timers.
///
/// Ticks scheduled by one driver must be delivered in scheduling order.
pub trait Scheduler {
    /// Delivers `tick` back to the owner after `delay`.
    fn schedule(&mut self, delay: Duration, tick: Tick);
}
