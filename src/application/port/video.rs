// SPDX-License-Identifier: MPL-2.0
//! Video decoding port definition.
//!
//! This module defines the [`VideoBackend`] and [`FrameStream`] traits.
//! Infrastructure adapters (like `FFmpeg`) implement them.
//!
//! # Design Notes
//!
//! - A stream reads frames sequentially; there is no seeking
//! - Releasing a stream is dropping it
//! - Methods are not `async` - frames are pulled from scheduled ticks
//! - Uses domain types only (`RawImage`, `VideoMetadata`, `AssetLoadError`)

use crate::domain::media::{RawImage, VideoMetadata};
use crate::error::AssetLoadError;
use std::path::Path;

// =============================================================================
// FrameStream Trait
// =============================================================================

/// An open video, exclusively owned by one playback session.
///
/// # Lifecycle
///
/// 1. Obtained from [`VideoBackend::open`]
/// 2. `next_frame()` is called until it returns `Ok(None)` or an error
/// 3. Dropped, which releases the underlying decoder
pub trait FrameStream {
    /// Properties reported when the stream was opened.
    fn metadata(&self) -> &VideoMetadata;

    /// Decodes the next video frame.
    ///
    /// Returns `Ok(Some(frame))` for each decoded frame, or `Ok(None)` when
    /// the end of the video stream is reached.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetLoadError`] if decoding fails.
    fn next_frame(&mut self) -> Result<Option<RawImage>, AssetLoadError>;
}

// =============================================================================
// VideoBackend Trait
// =============================================================================

/// Port for opening video files.
pub trait VideoBackend {
    /// Opens `path` for sequential frame reads.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetLoadError`] if:
    /// - The file cannot be read
    /// - The codec is not supported
    /// - No video stream is found
    fn open(&mut self, path: &Path) -> Result<Box<dyn FrameStream>, AssetLoadError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn _assert_object_safe(_: &dyn VideoBackend, _: &dyn FrameStream) {}

    // Mock implementation for testing
    struct MockStream {
        metadata: VideoMetadata,
        remaining: u32,
    }

    impl FrameStream for MockStream {
        fn metadata(&self) -> &VideoMetadata {
            &self.metadata
        }

        fn next_frame(&mut self) -> Result<Option<RawImage>, AssetLoadError> {
            if self.remaining == 0 {
                return Ok(None);
            }
            self.remaining -= 1;
            Ok(Some(RawImage::from_rgba(2, 2, vec![0; 16])))
        }
    }

    struct MockBackend;

    impl VideoBackend for MockBackend {
        fn open(&mut self, path: &Path) -> Result<Box<dyn FrameStream>, AssetLoadError> {
            if path.exists() {
                Ok(Box::new(MockStream {
                    metadata: VideoMetadata::new(2, 2, 25.0),
                    remaining: 3,
                }))
            } else {
                Err(AssetLoadError::Io {
                    path: path.to_path_buf(),
                    message: "not found".into(),
                })
            }
        }
    }

    #[test]
    fn mock_stream_ends_after_frames() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"").expect("write");

        let mut stream = MockBackend.open(&path).expect("open");
        assert_eq!(stream.metadata().width, 2);
        let mut frames = 0;
        while let Ok(Some(_)) = stream.next_frame() {
            frames += 1;
        }
        assert_eq!(frames, 3);
    }

    #[test]
    fn mock_backend_reports_missing_file() {
        let result = MockBackend.open(&PathBuf::from("/definitely/missing.mp4"));
        assert!(matches!(result, Err(AssetLoadError::Io { .. })));
    }
}
