// SPDX-License-Identifier: MPL-2.0
use lantern::application::browser::{Browser, VideoBrowser};
use lantern::application::port::{FrameStream, Scheduler, Surface, Tick, TickKind, VideoBackend};
use lantern::application::router::NavCommand;
use lantern::application::slideshow::{interval_or_default, Slideshow};
use lantern::application::video_playback::PlaybackTiming;
use lantern::domain::collection::{ImageRecord, MediaRecord};
use lantern::domain::media::{RawImage, VideoMetadata};
use lantern::domain::metadata::{MetadataPayload, PLAYBACK_ENDED_CAPTION};
use lantern::domain::playback::{Generation, SlideshowInterval, SlideshowState, VideoState};
use lantern::domain::viewport::Viewport;
use lantern::error::AssetLoadError;
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

#[derive(Default)]
struct RecordingFrontend {
    renders: usize,
    metadata: Option<MetadataPayload>,
    scheduled: Vec<(Duration, Tick)>,
}

impl RecordingFrontend {
    fn take_scheduled(&mut self) -> Vec<(Duration, Tick)> {
        std::mem::take(&mut self.scheduled)
    }

    fn caption(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.caption.as_str())
    }
}

impl Surface for RecordingFrontend {
    fn viewport(&self) -> Viewport {
        Viewport::new(320, 240)
    }

    fn render(&mut self, _image: RawImage) {
        self.renders += 1;
    }

    fn set_metadata(&mut self, payload: MetadataPayload) {
        self.metadata = Some(payload);
    }

    fn clear(&mut self) {
        self.metadata = None;
    }
}

impl Scheduler for RecordingFrontend {
    fn schedule(&mut self, delay: Duration, tick: Tick) {
        self.scheduled.push((delay, tick));
    }
}

/// Shared counters for every stream a backend hands out.
#[derive(Debug, Default, Clone)]
struct Counters {
    opened: Rc<Cell<usize>>,
    released: Rc<Cell<usize>>,
    reads: Rc<Cell<usize>>,
}

struct CountingStream {
    metadata: VideoMetadata,
    remaining: usize,
    counters: Counters,
}

impl FrameStream for CountingStream {
    fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    fn next_frame(&mut self) -> Result<Option<RawImage>, AssetLoadError> {
        self.counters.reads.set(self.counters.reads.get() + 1);
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        Ok(Some(RawImage::from_rgba(64, 48, vec![0; 64 * 48 * 4])))
    }
}

impl Drop for CountingStream {
    fn drop(&mut self) {
        self.counters.released.set(self.counters.released.get() + 1);
    }
}

/// Every clip has the same number of frames.
struct CountingBackend {
    frames: usize,
    counters: Counters,
}

impl VideoBackend for CountingBackend {
    fn open(&mut self, _path: &Path) -> Result<Box<dyn FrameStream>, AssetLoadError> {
        self.counters.opened.set(self.counters.opened.get() + 1);
        Ok(Box::new(CountingStream {
            metadata: VideoMetadata::new(64, 48, 25.0),
            remaining: self.frames,
            counters: self.counters.clone(),
        }))
    }
}

/// Writes a two-clip video manifest and returns its path.
fn video_manifest(dir: &Path) -> PathBuf {
    let manifest = r"<reel>
  <title>Holiday films</title>
  <video><source>first.mp4</source><caption>First reel</caption></video>
  <video><source>second.mp4</source><caption>Second reel</caption><date>1999</date></video>
</reel>";
    let path = dir.join("reel.xml");
    fs::write(&path, manifest).expect("Failed to write manifest");
    path
}

fn video_browser(frames: usize) -> (VideoBrowser<CountingBackend>, Counters) {
    let counters = Counters::default();
    let backend = CountingBackend {
        frames,
        counters: counters.clone(),
    };
    (VideoBrowser::new(backend, PlaybackTiming::default()), counters)
}

fn only_tick(frontend: &mut RecordingFrontend) -> Tick {
    let scheduled = frontend.take_scheduled();
    assert_eq!(scheduled.len(), 1, "expected exactly one scheduled tick");
    scheduled[0].1
}

#[test]
fn next_while_playing_releases_the_stream_once() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut browser, counters) = video_browser(100);
    let mut frontend = RecordingFrontend::default();

    browser.open(&video_manifest(dir.path()), &mut frontend).expect("opens");
    let stale = only_tick(&mut frontend);
    assert_eq!(stale.kind, TickKind::FramePull);
    assert_eq!(browser.state(), VideoState::Playing);
    assert_eq!(frontend.renders, 1);

    browser.navigate(NavCommand::Next, &mut frontend).expect("navigates");
    assert_eq!(counters.released.get(), 1);
    let start = only_tick(&mut frontend);
    assert_eq!(start.kind, TickKind::VideoStart);

    // The frame pull scheduled before navigating must not render.
    let reads = counters.reads.get();
    browser.on_tick(stale, &mut frontend).expect("stale tick ignored");
    assert_eq!(frontend.renders, 1);
    assert_eq!(counters.reads.get(), reads);

    browser.on_tick(start, &mut frontend).expect("second clip starts");
    assert_eq!(counters.opened.get(), 2);
    assert_eq!(counters.released.get(), 1);
    assert_eq!(frontend.caption(), Some("Second reel"));
    assert_eq!(frontend.renders, 2);
}

#[test]
fn rapid_navigation_opens_only_the_final_target() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut browser, counters) = video_browser(100);
    let mut frontend = RecordingFrontend::default();

    browser.open(&video_manifest(dir.path()), &mut frontend).expect("opens");
    frontend.take_scheduled();

    browser.navigate(NavCommand::Next, &mut frontend).expect("navigates");
    browser.navigate(NavCommand::Next, &mut frontend).expect("navigates");
    let ticks: Vec<Tick> = frontend.take_scheduled().into_iter().map(|(_, t)| t).collect();
    assert_eq!(ticks.len(), 2);

    for tick in ticks {
        browser.on_tick(tick, &mut frontend).expect("tick handled");
    }
    assert_eq!(counters.opened.get(), 2);
    assert_eq!(frontend.caption(), Some("First reel"));
    assert_eq!(browser.collection().position(), Some((1, 2)));
}

#[test]
fn end_of_stream_stops_reading_and_rendering() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut browser, counters) = video_browser(2);
    let mut frontend = RecordingFrontend::default();

    browser.open(&video_manifest(dir.path()), &mut frontend).expect("opens");
    let mut tick = only_tick(&mut frontend);
    browser.on_tick(tick, &mut frontend).expect("second frame");
    tick = only_tick(&mut frontend);
    browser.on_tick(tick, &mut frontend).expect("end of stream");

    assert_eq!(browser.state(), VideoState::Ended);
    assert_eq!(frontend.caption(), Some(PLAYBACK_ENDED_CAPTION));
    assert_eq!(frontend.renders, 2);
    assert_eq!(counters.released.get(), 1);
    assert!(frontend.scheduled.is_empty());

    let reads = counters.reads.get();
    browser.on_tick(tick, &mut frontend).expect("late tick ignored");
    assert_eq!(counters.reads.get(), reads);
    assert_eq!(frontend.renders, 2);
}

#[test]
fn reset_returns_to_idle_and_releases() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut browser, counters) = video_browser(10);
    let mut frontend = RecordingFrontend::default();

    browser.open(&video_manifest(dir.path()), &mut frontend).expect("opens");
    browser.reset(&mut frontend);

    assert_eq!(browser.state(), VideoState::Idle);
    assert!(browser.collection().is_empty());
    assert_eq!(counters.released.get(), 1);
    assert!(frontend.metadata.is_none());
}

#[test]
fn rejected_intervals_fall_back_to_three_seconds() {
    let default = SlideshowInterval::clamped(3);
    for input in ["0", "61", "abc", "", "-5", "2.5"] {
        assert_eq!(interval_or_default(Some(input), default).seconds(), 3, "input {input:?}");
    }
    assert_eq!(interval_or_default(None, default).seconds(), 3);
    assert_eq!(interval_or_default(Some("1"), default).seconds(), 1);
    assert_eq!(interval_or_default(Some(" 60 "), default).seconds(), 60);
}

/// Two slides sharing one image file.
fn two_slides(dir: &Path) -> Arc<[MediaRecord]> {
    let path = dir.join("slide.png");
    image_rs::RgbaImage::from_pixel(40, 30, image_rs::Rgba([200, 10, 10, 255]))
        .save(&path)
        .expect("Failed to write test image");

    vec![
        MediaRecord::Image(ImageRecord {
            path: path.clone(),
            caption: "One".into(),
            ..ImageRecord::default()
        }),
        MediaRecord::Image(ImageRecord {
            path,
            caption: "Two".into(),
            ..ImageRecord::default()
        }),
    ]
    .into()
}

#[test]
fn stopped_slideshow_ignores_its_timer() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut slideshow = Slideshow::new(
        two_slides(dir.path()),
        SlideshowInterval::clamped(5),
        Generation::new(),
    );
    let mut frontend = RecordingFrontend::default();
    slideshow.start(&mut frontend).expect("first slide");

    let (delay, tick) = frontend.take_scheduled()[0];
    assert_eq!(delay, Duration::from_secs(5));
    slideshow.on_tick(tick, &mut frontend).expect("second slide");
    assert_eq!(slideshow.position(), Some((2, 2)));
    assert_eq!(frontend.caption(), Some("Two"));

    let armed = only_tick(&mut frontend);
    slideshow.stop();
    assert_eq!(slideshow.state(), SlideshowState::Stopped);
    slideshow.on_tick(armed, &mut frontend).expect("ignored");

    assert_eq!(frontend.renders, 2);
    assert_eq!(slideshow.position(), Some((2, 2)));
    assert!(frontend.scheduled.is_empty());
}

#[test]
fn restarted_slideshow_runs_a_single_timer_chain() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let records = two_slides(dir.path());
    let mut frontend = RecordingFrontend::default();

    let mut generation = Generation::new().next();
    let mut first = Slideshow::new(Arc::clone(&records), SlideshowInterval::default(), generation);
    first.start(&mut frontend).expect("first slide");
    let leftover = only_tick(&mut frontend);
    first.stop();
    drop(first);

    generation = generation.next();
    let mut second = Slideshow::new(records, SlideshowInterval::default(), generation);
    second.start(&mut frontend).expect("first slide");
    let own = only_tick(&mut frontend);

    second.on_tick(leftover, &mut frontend).expect("leftover tick ignored");
    assert_eq!(second.position(), Some((1, 2)));
    assert!(frontend.scheduled.is_empty());

    second.on_tick(own, &mut frontend).expect("second slide");
    assert_eq!(second.position(), Some((2, 2)));
    assert_eq!(frontend.scheduled.len(), 1);
    assert_eq!(frontend.renders, 3);
}
