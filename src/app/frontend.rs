// SPDX-License-Identifier: MPL-2.0
//! Iced implementation of the display surface and scheduler ports.
//!
//! Renders are kept as an image handle read by the view; scheduled ticks
//! are buffered until the end of the update and then turned into sleeping
//! tasks that deliver [`Message::Tick`].
//!
//! An iced image handle owns its pixels, so each new bitmap is copied once
//! into a handle. A bitmap sharing the buffer already on screen (a refresh
//! that did not need resizing) reuses the existing handle.

use super::Message;
use crate::application::port::{Scheduler, Surface, Tick};
use crate::domain::media::RawImage;
use crate::domain::metadata::MetadataPayload;
use crate::domain::viewport::Viewport;
use crate::ui::picture::Picture;
use iced::widget::image;
use iced::Task;
use std::time::Duration;

/// Fallback area used until the first resize event arrives.
const INITIAL_VIEWPORT: (u32, u32) = (800, 460);

#[derive(Debug)]
pub struct IcedFrontend {
    viewport: Viewport,
    picture: Option<Picture>,
    /// Bitmap behind `picture`, sharing the display controller's buffer.
    shown: Option<RawImage>,
    metadata: Option<MetadataPayload>,
    pending: Vec<(Duration, Tick)>,
}

impl Default for IcedFrontend {
    fn default() -> Self {
        Self::new(Viewport::new(INITIAL_VIEWPORT.0, INITIAL_VIEWPORT.1))
    }
}

impl IcedFrontend {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            picture: None,
            shown: None,
            metadata: None,
            pending: Vec::new(),
        }
    }

    /// Updates the viewport. Returns true when it changed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        let changed = self.viewport != viewport;
        self.viewport = viewport;
        changed
    }

    #[must_use]
    pub fn picture(&self) -> Option<&Picture> {
        self.picture.as_ref()
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&MetadataPayload> {
        self.metadata.as_ref()
    }

    /// Takes the ticks scheduled since the last call.
    pub fn drain_pending(&mut self) -> Vec<(Duration, Tick)> {
        std::mem::take(&mut self.pending)
    }

    /// Turns the scheduled ticks into timer tasks.
    pub fn take_tasks(&mut self) -> Task<Message> {
        Task::batch(self.drain_pending().into_iter().map(|(delay, tick)| {
            Task::perform(tokio::time::sleep(delay), move |()| Message::Tick(tick))
        }))
    }
}

impl Surface for IcedFrontend {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn render(&mut self, image: RawImage) {
        let unchanged = self
            .shown
            .as_ref()
            .is_some_and(|shown| shown.shares_buffer_with(&image));
        if unchanged && self.picture.is_some() {
            return;
        }
        let (width, height) = (image.width(), image.height());
        self.picture = Some(Picture {
            handle: image::Handle::from_rgba(width, height, image.rgba_bytes().to_vec()),
            width,
            height,
        });
        self.shown = Some(image);
    }

    fn set_metadata(&mut self, payload: MetadataPayload) {
        self.metadata = Some(payload);
    }

    fn clear(&mut self) {
        self.picture = None;
        self.shown = None;
        self.metadata = None;
    }
}

impl Scheduler for IcedFrontend {
    fn schedule(&mut self, delay: Duration, tick: Tick) {
        self.pending.push((delay, tick));
    }
}
