// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - adapters implementing application ports.
//!
//! - [`ffmpeg`]: `FFmpeg` frame streams for [`VideoBackend`](crate::application::port::VideoBackend)

pub mod ffmpeg;
