// SPDX-License-Identifier: MPL-2.0
//! Frame-pull video playback.
//!
//! Playback is a state machine driven by scheduled ticks. Each successful
//! pull renders one frame and schedules the next pull after the frame delay;
//! there is no wall-clock pacing.
//!
//! # Sessions
//!
//! A [`PlaybackSession`] owns the only open [`FrameStream`]. The stream is
//! dropped, which releases the decoder, whenever the player leaves
//! `Playing`: end of stream, decode error, navigation or reset.
//!
//! # Generations
//!
//! Every tick carries the generation current when it was scheduled. Aborting
//! bumps the generation, so a tick already in flight is ignored before any
//! decoding or rendering happens. Navigation schedules the next start after
//! a short grace delay; navigating again inside that window bumps the
//! generation once more, so only the final target is ever opened.

use crate::application::display::DisplayController;
use crate::application::port::{Frontend, FrameStream, Tick, TickKind, VideoBackend};
use crate::domain::collection::MediaRecord;
use crate::domain::metadata::MetadataPayload;
use crate::domain::playback::{Generation, VideoState};
use crate::error::AssetLoadError;
use std::time::Duration;

/// Delays used by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTiming {
    /// Pause between two frame pulls.
    pub frame_delay: Duration,
    /// Pause between aborting a session and starting the next one.
    pub restart_grace: Duration,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(5),
            restart_grace: Duration::from_millis(15),
        }
    }
}

/// The live frame stream for one playing record.
pub struct PlaybackSession {
    record: MediaRecord,
    stream: Box<dyn FrameStream>,
    frames_shown: u64,
}

impl PlaybackSession {
    #[must_use]
    pub fn record(&self) -> &MediaRecord {
        &self.record
    }
}

impl std::fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("path", &self.record.path())
            .field("metadata", self.stream.metadata())
            .field("frames_shown", &self.frames_shown)
            .finish()
    }
}

/// Plays video records one frame at a time.
#[derive(Debug)]
pub struct VideoPlayer<B: VideoBackend> {
    backend: B,
    timing: PlaybackTiming,
    state: VideoState,
    generation: Generation,
    session: Option<PlaybackSession>,
    pending: Option<MediaRecord>,
}

impl<B: VideoBackend> VideoPlayer<B> {
    #[must_use]
    pub fn new(backend: B, timing: PlaybackTiming) -> Self {
        Self {
            backend,
            timing,
            state: VideoState::Idle,
            generation: Generation::new(),
            session: None,
            pending: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> VideoState {
        self.state
    }

    #[must_use]
    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    /// Record waiting for its start tick, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&MediaRecord> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Starts playing `record` right away.
    ///
    /// Any current session is aborted first. Metadata is shown before the
    /// stream is opened, and the first frame is pulled immediately.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetLoadError`] if the stream cannot be opened or the
    /// first frame cannot be decoded; the player is then `Aborted`.
    pub fn play(
        &mut self,
        record: &MediaRecord,
        display: &mut DisplayController,
        frontend: &mut impl Frontend,
    ) -> Result<(), AssetLoadError> {
        self.abort();
        frontend.set_metadata(MetadataPayload::for_record(record));

        let stream = match self.backend.open(record.path()) {
            Ok(stream) => stream,
            Err(err) => {
                log::warn!("Failed to load video {}: {err}", record.path().display());
                self.state = VideoState::Aborted;
                return Err(err);
            }
        };
        let metadata = stream.metadata();
        log::debug!(
            "Playing {} ({}x{} @ {:.2} fps)",
            record.path().display(),
            metadata.width,
            metadata.height,
            metadata.fps
        );

        self.session = Some(PlaybackSession {
            record: record.clone(),
            stream,
            frames_shown: 0,
        });
        self.state = VideoState::Playing;
        self.pull(display, frontend)
    }

    /// Aborts the current session and schedules `record` to start after the
    /// grace delay. Calling it again before the start tick re-targets it.
    pub fn restart_with(&mut self, record: &MediaRecord, frontend: &mut impl Frontend) {
        self.abort();
        self.pending = Some(record.clone());
        frontend.schedule(
            self.timing.restart_grace,
            Tick::new(TickKind::VideoStart, self.generation),
        );
    }

    /// Handles a scheduled tick.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetLoadError`] when opening or decoding fails; the
    /// session is released and the player is `Aborted`.
    pub fn on_tick(
        &mut self,
        tick: Tick,
        display: &mut DisplayController,
        frontend: &mut impl Frontend,
    ) -> Result<(), AssetLoadError> {
        if tick.generation != self.generation {
            return Ok(());
        }
        match tick.kind {
            TickKind::FramePull if self.state.is_playing() => self.pull(display, frontend),
            TickKind::VideoStart => match self.pending.take() {
                Some(record) => self.play(&record, display, frontend),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }

    /// Cuts the current session short.
    ///
    /// Bumps the generation so in-flight ticks become no-ops, drops any
    /// pending start and releases the stream. Returns whether a session was
    /// released.
    pub fn abort(&mut self) -> bool {
        self.generation = self.generation.next();
        self.pending = None;
        match self.session.take() {
            Some(session) => {
                log::debug!(
                    "Aborted {} after {} frames",
                    session.record.path().display(),
                    session.frames_shown
                );
                self.state = VideoState::Aborted;
                true
            }
            None => false,
        }
    }

    /// Aborts everything and returns to `Idle`.
    pub fn reset(&mut self) {
        self.abort();
        self.state = VideoState::Idle;
    }

    fn pull(
        &mut self,
        display: &mut DisplayController,
        frontend: &mut impl Frontend,
    ) -> Result<(), AssetLoadError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        match session.stream.next_frame() {
            Ok(Some(frame)) => {
                session.frames_shown += 1;
                display.show_frame(frame, frontend);
                frontend.schedule(
                    self.timing.frame_delay,
                    Tick::new(TickKind::FramePull, self.generation),
                );
                Ok(())
            }
            Ok(None) => {
                if let Some(session) = self.session.take() {
                    log::debug!(
                        "Finished {} after {} frames",
                        session.record.path().display(),
                        session.frames_shown
                    );
                }
                self.state = VideoState::Ended;
                frontend.set_metadata(MetadataPayload::playback_ended());
                Ok(())
            }
            Err(err) => {
                log::warn!("Video decoding failed: {err}");
                self.session = None;
                self.state = VideoState::Aborted;
                Err(err)
            }
        }
    }
}
