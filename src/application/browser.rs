// SPDX-License-Identifier: MPL-2.0
//! Collection browsers for the two viewers.
//!
//! A browser owns the opened [`Collection`] and the [`DisplayController`]
//! (plus the [`VideoPlayer`] for videos) and turns navigation commands into
//! cursor moves and redraws.

use crate::application::display::DisplayController;
use crate::application::port::{Frontend, Tick, VideoBackend};
use crate::application::router::NavCommand;
use crate::application::video_playback::{PlaybackTiming, VideoPlayer};
use crate::domain::collection::Collection;
use crate::domain::media::MediaKind;
use crate::domain::playback::VideoState;
use crate::error::{AssetLoadError, Error, Result};
use crate::manifest;
use std::path::Path;

/// Operations shared by the photo and video browsers.
pub trait Browser {
    /// Kind of entries read from manifests.
    const KIND: MediaKind;

    fn collection(&self) -> &Collection;

    /// `(index + 1, len)` of the item on screen, for the counter label.
    fn displayed_position(&self) -> Option<(usize, usize)> {
        self.collection().position()
    }

    /// Opens a manifest, replacing the current collection.
    ///
    /// On a manifest error the collection is reset to empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] when the manifest cannot be loaded, or
    /// [`Error::Asset`] when the first item cannot be shown.
    fn open<F: Frontend>(&mut self, path: &Path, frontend: &mut F) -> Result<()>;

    /// Discards the collection and clears the display.
    fn reset<F: Frontend>(&mut self, frontend: &mut F);

    /// Applies a navigation command. Empty collections ignore navigation.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetLoadError`] when the new item cannot be shown.
    fn navigate<F: Frontend>(
        &mut self,
        command: NavCommand,
        frontend: &mut F,
    ) -> std::result::Result<(), AssetLoadError>;

    /// Re-fits the current item after the viewport changed.
    fn refresh<F: Frontend>(&mut self, frontend: &mut F);

    /// Handles a scheduled tick.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetLoadError`] when playback fails.
    fn on_tick<F: Frontend>(
        &mut self,
        tick: Tick,
        frontend: &mut F,
    ) -> std::result::Result<(), AssetLoadError>;
}

/// Moves the cursor. Returns false when the command is not a cursor move.
fn move_cursor(collection: &mut Collection, command: NavCommand) -> bool {
    match command {
        NavCommand::Previous => collection.previous(),
        NavCommand::Next => collection.next(),
        NavCommand::Home => collection.home(),
        NavCommand::StopSlideshow => return false,
    }
    true
}

// =============================================================================
// ImageBrowser
// =============================================================================

/// Browser for picture collections.
#[derive(Debug)]
pub struct ImageBrowser {
    collection: Collection,
    display: DisplayController,
    /// Position of the picture on screen; lags the cursor after a failed load.
    displayed: Option<(usize, usize)>,
}

impl Default for ImageBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            collection: Collection::empty(MediaKind::Image.default_title()),
            display: DisplayController::new(),
            displayed: None,
        }
    }

    fn show_current<F: Frontend>(
        &mut self,
        frontend: &mut F,
    ) -> std::result::Result<(), AssetLoadError> {
        let Some(record) = self.collection.current() else {
            return Ok(());
        };
        self.display.show_image(record, frontend)?;
        self.displayed = self.collection.position();
        Ok(())
    }
}

impl Browser for ImageBrowser {
    const KIND: MediaKind = MediaKind::Image;

    fn collection(&self) -> &Collection {
        &self.collection
    }

    fn displayed_position(&self) -> Option<(usize, usize)> {
        self.displayed
    }

    fn open<F: Frontend>(&mut self, path: &Path, frontend: &mut F) -> Result<()> {
        let (collection, err) = manifest::load_or_empty(path, Self::KIND);
        self.collection = collection;
        self.displayed = None;
        self.display.clear(frontend);
        if let Some(err) = err {
            return Err(Error::Manifest(err));
        }
        self.show_current(frontend).map_err(Error::Asset)
    }

    fn reset<F: Frontend>(&mut self, frontend: &mut F) {
        self.collection = Collection::empty(Self::KIND.default_title());
        self.displayed = None;
        self.display.clear(frontend);
    }

    fn navigate<F: Frontend>(
        &mut self,
        command: NavCommand,
        frontend: &mut F,
    ) -> std::result::Result<(), AssetLoadError> {
        if self.collection.is_empty() || !move_cursor(&mut self.collection, command) {
            return Ok(());
        }
        self.show_current(frontend)
    }

    fn refresh<F: Frontend>(&mut self, frontend: &mut F) {
        self.display.refresh(frontend);
    }

    fn on_tick<F: Frontend>(
        &mut self,
        _tick: Tick,
        _frontend: &mut F,
    ) -> std::result::Result<(), AssetLoadError> {
        Ok(())
    }
}

// =============================================================================
// VideoBrowser
// =============================================================================

/// Browser for video collections.
#[derive(Debug)]
pub struct VideoBrowser<B: VideoBackend> {
    collection: Collection,
    display: DisplayController,
    player: VideoPlayer<B>,
}

impl<B: VideoBackend> VideoBrowser<B> {
    #[must_use]
    pub fn new(backend: B, timing: PlaybackTiming) -> Self {
        Self {
            collection: Collection::empty(MediaKind::Video.default_title()),
            display: DisplayController::new(),
            player: VideoPlayer::new(backend, timing),
        }
    }

    #[must_use]
    pub fn player(&self) -> &VideoPlayer<B> {
        &self.player
    }

    #[must_use]
    pub fn state(&self) -> VideoState {
        self.player.state()
    }
}

impl<B: VideoBackend> Browser for VideoBrowser<B> {
    const KIND: MediaKind = MediaKind::Video;

    fn collection(&self) -> &Collection {
        &self.collection
    }

    fn open<F: Frontend>(&mut self, path: &Path, frontend: &mut F) -> Result<()> {
        self.player.reset();
        let (collection, err) = manifest::load_or_empty(path, Self::KIND);
        self.collection = collection;
        self.display.clear(frontend);
        if let Some(err) = err {
            return Err(Error::Manifest(err));
        }
        match self.collection.current() {
            Some(record) => self
                .player
                .play(record, &mut self.display, frontend)
                .map_err(Error::Asset),
            None => Ok(()),
        }
    }

    fn reset<F: Frontend>(&mut self, frontend: &mut F) {
        self.player.reset();
        self.collection = Collection::empty(Self::KIND.default_title());
        self.display.clear(frontend);
    }

    fn navigate<F: Frontend>(
        &mut self,
        command: NavCommand,
        frontend: &mut F,
    ) -> std::result::Result<(), AssetLoadError> {
        if self.collection.is_empty() || !move_cursor(&mut self.collection, command) {
            return Ok(());
        }
        if let Some(record) = self.collection.current() {
            self.player.restart_with(record, frontend);
        }
        Ok(())
    }

    fn refresh<F: Frontend>(&mut self, frontend: &mut F) {
        self.display.refresh(frontend);
    }

    fn on_tick<F: Frontend>(
        &mut self,
        tick: Tick,
        frontend: &mut F,
    ) -> std::result::Result<(), AssetLoadError> {
        self.player.on_tick(tick, &mut self.display, frontend)
    }
}
