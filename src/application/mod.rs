// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`display`]: Decoding, fitting and rendering the current item
//! - [`slideshow`]: Timed slideshow over a record list
//! - [`video_playback`]: Frame-pull video state machine
//! - [`router`]: Keys and buttons to navigation commands
//! - [`browser`]: Photo and video browsers tying the above together
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`app`) drives browsers and implements the
//!   surface and scheduler ports

pub mod browser;
pub mod display;
pub mod port;
pub mod router;
pub mod slideshow;
pub mod video_playback;
