// SPDX-License-Identifier: MPL-2.0
//! Iced views of the viewers.
//!
//! # Screens
//!
//! - [`viewer`] - Windowed viewer with metadata and navigation bars
//! - [`interval_prompt`] - Slideshow interval prompt
//! - [`slideshow`] - Fullscreen slideshow
//!
//! # Shared Infrastructure
//!
//! - [`picture`] - The fitted bitmap
//! - [`metadata_bar`] - Caption and details of the current item
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod interval_prompt;
pub mod metadata_bar;
pub mod notifications;
pub mod picture;
pub mod slideshow;
pub mod styles;
pub mod viewer;
