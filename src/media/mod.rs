// SPDX-License-Identifier: MPL-2.0
//! Media decoding helpers for images and videos.

pub mod image;
pub mod video;

pub use image::{load_image, resize_to_fit};
pub use video::init_ffmpeg;
