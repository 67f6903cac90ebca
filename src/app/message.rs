// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::application::port::Tick;
use crate::application::router::NavKey;
use crate::ui::{interval_prompt, notifications, viewer};
use iced::{window, Size};
use std::path::PathBuf;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A navigation key was pressed and not captured by a widget.
    Key(NavKey),
    /// Buttons of the windowed viewer.
    Viewer(viewer::Message),
    /// Slideshow interval prompt.
    Prompt(interval_prompt::Message),
    WindowResized { window: window::Id, size: Size },
    /// A timer armed through the scheduler port fired.
    Tick(Tick),
    /// Result of the open dialog.
    ManifestPicked(Option<PathBuf>),
    Notification(notifications::NotificationMessage),
}

/// Options given on the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Manifest opened at launch.
    pub manifest: Option<PathBuf>,
}
