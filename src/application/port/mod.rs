// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure and GUI
//! adapters implement. These traits use only domain types, ensuring the
//! application layer remains independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`surface`]: Where bitmaps and metadata are shown
//! - [`scheduler`]: One-shot timers delivering [`Tick`]s
//! - [`video`]: Sequential video frame reading
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Fallible methods return `Result` with domain error types
//! - No `async fn` - use Iced's `Task` return type pattern in callers

pub mod scheduler;
pub mod surface;
pub mod video;

// Re-export main types for convenience
pub use scheduler::{Scheduler, Tick, TickKind};
pub use surface::Surface;
pub use video::{FrameStream, VideoBackend};

/// A GUI adapter providing both a surface and a scheduler.
pub trait Frontend: Surface + Scheduler {}

impl<T: Surface + Scheduler + ?Sized> Frontend for T {}
