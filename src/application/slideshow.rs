// SPDX-License-Identifier: MPL-2.0
//! Timed slideshow over a read-only record list.
//!
//! The slideshow keeps its own cursor, starting at the first record, and its
//! own display controller, so the owning viewer is left as it was.

use crate::application::display::DisplayController;
use crate::application::port::{Frontend, Tick, TickKind};
use crate::domain::collection::{Cursor, MediaRecord};
use crate::domain::playback::{interval_bounds, Generation, SlideshowInterval, SlideshowState};
use crate::error::{AssetLoadError, ConfigInputError};
use std::sync::Arc;

/// Parses interval input typed by the user, in whole seconds.
///
/// # Errors
///
/// Returns a [`ConfigInputError`] for non-numeric or out-of-range input.
pub fn parse_interval(input: &str) -> Result<SlideshowInterval, ConfigInputError> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ConfigInputError::NotANumber(trimmed.to_owned()))?;
    u32::try_from(value)
        .ok()
        .and_then(SlideshowInterval::new)
        .ok_or(ConfigInputError::OutOfRange {
            value,
            min: interval_bounds::MIN,
            max: interval_bounds::MAX,
        })
}

/// Resolves prompt input to an interval.
///
/// Cancelled prompts (`None`) and rejected input use `default`.
#[must_use]
pub fn interval_or_default(input: Option<&str>, default: SlideshowInterval) -> SlideshowInterval {
    match input.map(parse_interval) {
        Some(Ok(interval)) => interval,
        Some(Err(err)) => {
            log::debug!("Using default slideshow interval: {err}");
            default
        }
        None => default,
    }
}

/// A running (or finished) slideshow.
#[derive(Debug)]
pub struct Slideshow {
    records: Arc<[MediaRecord]>,
    cursor: Cursor,
    interval: SlideshowInterval,
    state: SlideshowState,
    generation: Generation,
    display: DisplayController,
}

impl Slideshow {
    /// Creates an idle slideshow whose ticks carry `generation`.
    ///
    /// Timers armed by an earlier slideshow cannot be cancelled, so the
    /// owner hands each new slideshow a generation it has not used before.
    #[must_use]
    pub fn new(
        records: Arc<[MediaRecord]>,
        interval: SlideshowInterval,
        generation: Generation,
    ) -> Self {
        Self {
            cursor: Cursor::new(records.len()),
            records,
            interval,
            state: SlideshowState::Idle,
            generation,
            display: DisplayController::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> SlideshowState {
        self.state
    }

    /// One-based position of the current slide.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        self.cursor.position()
    }

    /// Shows the first slide and arms the timer.
    ///
    /// Only an idle slideshow with at least one record starts.
    ///
    /// # Errors
    ///
    /// Returns the [`AssetLoadError`] of the first slide. The slideshow is
    /// running anyway and will move on when the timer fires.
    pub fn start(&mut self, frontend: &mut impl Frontend) -> Result<(), AssetLoadError> {
        if self.state != SlideshowState::Idle || self.records.is_empty() {
            return Ok(());
        }
        self.state = SlideshowState::Displaying;
        log::debug!(
            "Slideshow started: {} slides every {}s",
            self.records.len(),
            self.interval.seconds()
        );
        self.show_and_arm(frontend)
    }

    /// Handles a timer tick: advance, show, re-arm.
    ///
    /// Ticks from an older generation, or arriving after `stop`, are ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`AssetLoadError`] of the new slide. The previous slide
    /// stays on screen and the timer is re-armed.
    pub fn on_tick(&mut self, tick: Tick, frontend: &mut impl Frontend) -> Result<(), AssetLoadError> {
        if tick.kind != TickKind::SlideAdvance
            || tick.generation != self.generation
            || !self.state.is_displaying()
        {
            return Ok(());
        }
        self.cursor.next();
        self.show_and_arm(frontend)
    }

    /// Stops the slideshow. The armed timer becomes stale.
    pub fn stop(&mut self) {
        if self.state.is_stopped() {
            return;
        }
        self.state = SlideshowState::Stopped;
        self.generation = self.generation.next();
        log::debug!("Slideshow stopped");
    }

    /// Re-fits the current slide after a resize.
    pub fn refresh(&mut self, frontend: &mut impl Frontend) {
        self.display.refresh(frontend);
    }

    fn show_and_arm(&mut self, frontend: &mut impl Frontend) -> Result<(), AssetLoadError> {
        let result = match self.cursor.index().and_then(|i| self.records.get(i)) {
            Some(record) => self.display.show_image(record, frontend),
            None => Ok(()),
        };
        frontend.schedule(
            self.interval.as_duration(),
            Tick::new(TickKind::SlideAdvance, self.generation),
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collection::ImageRecord;
    use crate::domain::viewport::Viewport;
    use crate::test_utils::FakeFrontend;
    use image_rs::{Rgba, RgbaImage};
    use std::path::Path;
    use std::time::Duration;
    use tempfile::tempdir;

    fn records_in(dir: &Path, names: &[&str]) -> Arc<[MediaRecord]> {
        names
            .iter()
            .map(|name| {
                let path = dir.join(name);
                if !name.starts_with("missing") {
                    RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]))
                        .save(&path)
                        .expect("write png");
                }
                MediaRecord::Image(ImageRecord {
                    path,
                    caption: (*name).to_owned(),
                    ..ImageRecord::default()
                })
            })
            .collect()
    }

    fn fire(slideshow: &mut Slideshow, frontend: &mut FakeFrontend) -> Result<(), AssetLoadError> {
        let (_, tick) = frontend.take_scheduled().pop().expect("timer armed");
        slideshow.on_tick(tick, frontend)
    }

    #[test]
    fn invalid_interval_input_falls_back_to_default() {
        let default = SlideshowInterval::default();
        for input in ["0", "61", "abc", "", "2.5", "-4"] {
            assert_eq!(interval_or_default(Some(input), default).seconds(), 3, "{input}");
        }
        assert_eq!(interval_or_default(None, default).seconds(), 3);
        assert_eq!(interval_or_default(Some(" 10 "), default).seconds(), 10);
    }

    #[test]
    fn parse_interval_reports_reason() {
        assert!(matches!(parse_interval("x"), Err(ConfigInputError::NotANumber(_))));
        assert!(matches!(
            parse_interval("61"),
            Err(ConfigInputError::OutOfRange { value: 61, .. })
        ));
    }

    #[test]
    fn start_shows_first_slide_and_arms_timer() {
        let dir = tempdir().expect("tempdir");
        let mut slideshow = Slideshow::new(
            records_in(dir.path(), &["a.png", "b.png"]),
            SlideshowInterval::clamped(5),
            Generation::new(),
        );
        let mut frontend = FakeFrontend::new(Viewport::new(800, 600));

        slideshow.start(&mut frontend).expect("first slide");
        assert_eq!(slideshow.state(), SlideshowState::Displaying);
        assert_eq!(frontend.metadata.as_ref().map(|m| m.caption.as_str()), Some("a.png"));
        assert_eq!(frontend.scheduled.len(), 1);
        assert_eq!(frontend.scheduled[0].0, Duration::from_secs(5));
    }

    #[test]
    fn ticks_advance_and_wrap() {
        let dir = tempdir().expect("tempdir");
        let mut slideshow = Slideshow::new(
            records_in(dir.path(), &["a.png", "b.png"]),
            SlideshowInterval::default(),
            Generation::new(),
        );
        let mut frontend = FakeFrontend::new(Viewport::new(800, 600));
        slideshow.start(&mut frontend).expect("first slide");

        fire(&mut slideshow, &mut frontend).expect("second slide");
        assert_eq!(slideshow.position(), Some((2, 2)));
        fire(&mut slideshow, &mut frontend).expect("wraps to first");
        assert_eq!(slideshow.position(), Some((1, 2)));
        assert_eq!(frontend.renders.len(), 3);
    }

    #[test]
    fn render_error_keeps_slide_and_rearms() {
        let dir = tempdir().expect("tempdir");
        let mut slideshow = Slideshow::new(
            records_in(dir.path(), &["a.png", "missing.png"]),
            SlideshowInterval::default(),
            Generation::new(),
        );
        let mut frontend = FakeFrontend::new(Viewport::new(800, 600));
        slideshow.start(&mut frontend).expect("first slide");

        let err = fire(&mut slideshow, &mut frontend).unwrap_err();
        assert!(matches!(err, AssetLoadError::Io { .. }));
        assert_eq!(frontend.renders.len(), 1);
        assert_eq!(frontend.scheduled.len(), 1);
        assert!(slideshow.state().is_displaying());
    }

    #[test]
    fn stop_makes_pending_tick_stale() {
        let dir = tempdir().expect("tempdir");
        let mut slideshow = Slideshow::new(
            records_in(dir.path(), &["a.png", "b.png"]),
            SlideshowInterval::default(),
            Generation::new(),
        );
        let mut frontend = FakeFrontend::new(Viewport::new(800, 600));
        slideshow.start(&mut frontend).expect("first slide");

        slideshow.stop();
        fire(&mut slideshow, &mut frontend).expect("ignored");
        assert_eq!(frontend.renders.len(), 1);
        assert!(frontend.scheduled.is_empty());

        slideshow.start(&mut frontend).expect("no-op");
        assert_eq!(slideshow.state(), SlideshowState::Stopped);
        assert!(frontend.scheduled.is_empty());
    }

    #[test]
    fn tick_from_stopped_slideshow_is_ignored_by_the_next_one() {
        let dir = tempdir().expect("tempdir");
        let records = records_in(dir.path(), &["a.png", "b.png", "c.png"]);
        let mut frontend = FakeFrontend::new(Viewport::new(800, 600));

        let first_generation = Generation::new().next();
        let mut first = Slideshow::new(
            Arc::clone(&records),
            SlideshowInterval::default(),
            first_generation,
        );
        first.start(&mut frontend).expect("first slide");
        let (_, leftover) = frontend.take_scheduled().pop().expect("timer armed");
        first.stop();
        drop(first);

        let mut second = Slideshow::new(
            records,
            SlideshowInterval::default(),
            first_generation.next(),
        );
        second.start(&mut frontend).expect("first slide");
        assert_eq!(frontend.take_scheduled().len(), 1);

        second.on_tick(leftover, &mut frontend).expect("ignored");
        assert_eq!(second.position(), Some((1, 3)));
        assert_eq!(frontend.renders.len(), 2);
        assert!(frontend.scheduled.is_empty());
    }

    #[test]
    fn empty_slideshow_does_not_start() {
        let mut slideshow = Slideshow::new(
            Arc::from(Vec::new()),
            SlideshowInterval::default(),
            Generation::new(),
        );
        let mut frontend = FakeFrontend::new(Viewport::new(800, 600));
        slideshow.start(&mut frontend).expect("no-op");
        assert_eq!(slideshow.state(), SlideshowState::Idle);
        assert!(frontend.scheduled.is_empty());
    }
}
