// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float assertions and fake port adapters.

// Re-export approx macros for convenient use in tests
pub use approx::assert_relative_eq;

use crate::application::port::{FrameStream, Scheduler, Surface, Tick, VideoBackend};
use crate::domain::media::{RawImage, VideoMetadata};
use crate::domain::metadata::MetadataPayload;
use crate::domain::viewport::Viewport;
use crate::error::AssetLoadError;
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

/// Surface and scheduler that record every command.
#[derive(Debug)]
pub struct FakeFrontend {
    pub viewport: Viewport,
    pub renders: Vec<RawImage>,
    pub metadata: Option<MetadataPayload>,
    pub clears: usize,
    pub scheduled: Vec<(Duration, Tick)>,
}

impl FakeFrontend {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            renders: Vec::new(),
            metadata: None,
            clears: 0,
            scheduled: Vec::new(),
        }
    }

    pub fn last_render(&self) -> Option<&RawImage> {
        self.renders.last()
    }

    /// Removes and returns the ticks scheduled so far.
    pub fn take_scheduled(&mut self) -> Vec<(Duration, Tick)> {
        std::mem::take(&mut self.scheduled)
    }
}

impl Surface for FakeFrontend {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn render(&mut self, image: RawImage) {
        self.renders.push(image);
    }

    fn set_metadata(&mut self, payload: MetadataPayload) {
        self.metadata = Some(payload);
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.metadata = None;
    }
}

impl Scheduler for FakeFrontend {
    fn schedule(&mut self, delay: Duration, tick: Tick) {
        self.scheduled.push((delay, tick));
    }
}

/// Shared counters observed by the fake video backend.
#[derive(Debug, Default, Clone)]
pub struct StreamCounters {
    pub opened: Rc<Cell<usize>>,
    pub released: Rc<Cell<usize>>,
    pub reads: Rc<Cell<usize>>,
}

/// How a fake stream behaves once opened.
#[derive(Debug, Clone, Copy)]
pub enum FakeClip {
    /// Yields this many 4x4 frames, then ends.
    Frames(usize),
    /// Yields this many frames, then fails.
    FailsAfter(usize),
}

/// Video backend opening fake clips registered by path.
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub counters: StreamCounters,
    pub clips: Vec<(PathBuf, FakeClip)>,
    pub opened_paths: Vec<PathBuf>,
}

impl FakeBackend {
    pub fn with_clip(mut self, path: impl Into<PathBuf>, clip: FakeClip) -> Self {
        self.clips.push((path.into(), clip));
        self
    }
}

impl VideoBackend for FakeBackend {
    fn open(&mut self, path: &Path) -> Result<Box<dyn FrameStream>, AssetLoadError> {
        self.opened_paths.push(path.to_path_buf());
        let clip = self
            .clips
            .iter()
            .find(|(clip_path, _)| clip_path == path)
            .map(|(_, clip)| *clip)
            .ok_or_else(|| AssetLoadError::Io {
                path: path.to_path_buf(),
                message: "No such file or directory".into(),
            })?;
        self.counters.opened.set(self.counters.opened.get() + 1);
        Ok(Box::new(FakeStream {
            path: path.to_path_buf(),
            clip,
            served: 0,
            metadata: VideoMetadata::new(4, 4, 25.0),
            counters: self.counters.clone(),
        }))
    }
}

struct FakeStream {
    path: PathBuf,
    clip: FakeClip,
    served: usize,
    metadata: VideoMetadata,
    counters: StreamCounters,
}

impl FrameStream for FakeStream {
    fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    fn next_frame(&mut self) -> Result<Option<RawImage>, AssetLoadError> {
        self.counters.reads.set(self.counters.reads.get() + 1);
        let limit = match self.clip {
            FakeClip::Frames(n) => n,
            FakeClip::FailsAfter(n) if self.served >= n => {
                return Err(AssetLoadError::Decode {
                    path: self.path.clone(),
                    message: "corrupt packet".into(),
                });
            }
            FakeClip::FailsAfter(_) => usize::MAX,
        };
        if self.served >= limit {
            return Ok(None);
        }
        self.served += 1;
        Ok(Some(RawImage::from_rgba(4, 4, vec![0; 64])))
    }
}

impl Drop for FakeStream {
    fn drop(&mut self) {
        self.counters.released.set(self.counters.released.get() + 1);
    }
}
