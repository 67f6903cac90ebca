// SPDX-License-Identifier: MPL-2.0
//! `lantern` displays photo and video collections described by an XML
//! manifest, built with the Iced GUI framework.
//!
//! The core (manifest loading, the collection and its cursor, fitting items
//! to the viewport, slideshow and video playback) does not depend on the
//! toolkit; it talks to the window through the ports in
//! [`application::port`]. The [`app`] module wires those ports to Iced.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod manifest;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
