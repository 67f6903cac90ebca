// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter implementing the [`VideoBackend`] port trait.
//!
//! [`FfmpegBackend::open`] returns an [`FfmpegStream`] that decodes frames
//! sequentially and converts them to RGBA. Dropping the stream closes the
//! input and the decoder.
//!
//! [`VideoBackend`]: crate::application::port::VideoBackend

use std::path::{Path, PathBuf};

use crate::application::port::{FrameStream, VideoBackend};
use crate::domain::media::{RawImage, VideoMetadata};
use crate::error::AssetLoadError;

/// Frame rate reported when the container does not advertise one.
const FALLBACK_FPS: f64 = 30.0;

/// `FFmpeg`-based implementation of [`VideoBackend`].
///
/// # Example
///
/// ```ignore
/// use lantern::application::port::VideoBackend;
/// use lantern::infrastructure::ffmpeg::FfmpegBackend;
///
/// let mut stream = FfmpegBackend::new().open(Path::new("video.mp4"))?;
/// while let Some(frame) = stream.next_frame()? {
///     println!("Frame: {}x{}", frame.width(), frame.height());
/// }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FfmpegBackend;

impl FfmpegBackend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// An open video file, read front to back.
pub struct FfmpegStream {
    path: PathBuf,
    input_context: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    scaler: ffmpeg_next::software::scaling::Context,
    video_stream_index: usize,
    metadata: VideoMetadata,
    /// Set once the demuxer ran dry and the decoder was flushed.
    eof_sent: bool,
}

impl std::fmt::Debug for FfmpegStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FfmpegStream")
            .field("path", &self.path)
            .field("metadata", &self.metadata)
            .field("eof_sent", &self.eof_sent)
            .finish_non_exhaustive()
    }
}

impl VideoBackend for FfmpegBackend {
    fn open(&mut self, path: &Path) -> Result<Box<dyn FrameStream>, AssetLoadError> {
        Ok(Box::new(FfmpegStream::open(path)?))
    }
}

impl FfmpegStream {
    /// Opens `path` and prepares the video decoder and RGBA scaler.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetLoadError`] if the file cannot be read, has no
    /// video stream, or uses an unsupported codec.
    pub fn open(path: &Path) -> Result<Self, AssetLoadError> {
        let path_buf = path.to_path_buf();
        if !path.exists() {
            return Err(AssetLoadError::Io {
                path: path_buf,
                message: "No such file or directory".into(),
            });
        }

        crate::media::init_ffmpeg().map_err(|e| AssetLoadError::Decode {
            path: path_buf.clone(),
            message: e.to_string(),
        })?;

        let decode_error = |message: String| AssetLoadError::Decode {
            path: path_buf.clone(),
            message,
        };

        let input_context = ffmpeg_next::format::input(path)
            .map_err(|e| decode_error(format!("Failed to open video: {e}")))?;

        let video_stream = input_context
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| AssetLoadError::NoVideoStream {
                path: path_buf.clone(),
            })?;
        let video_stream_index = video_stream.index();

        let rate = video_stream.avg_frame_rate();
        let fps = if rate.denominator() != 0 && rate.numerator() != 0 {
            f64::from(rate.numerator()) / f64::from(rate.denominator())
        } else {
            FALLBACK_FPS
        };

        let parameters = video_stream.parameters();
        let codec_id = parameters.id();
        let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(parameters)
            .map_err(|e| decode_error(format!("Failed to create codec context: {e}")))?;
        let decoder = context_decoder.decoder().video().map_err(|e| match e {
            ffmpeg_next::Error::DecoderNotFound => AssetLoadError::UnsupportedCodec {
                path: path_buf.clone(),
                codec: format!("{codec_id:?}"),
            },
            other => decode_error(format!("Failed to create video decoder: {other}")),
        })?;

        let width = decoder.width();
        let height = decoder.height();
        if width == 0 || height == 0 {
            return Err(decode_error(format!("Invalid video dimensions {width}x{height}")));
        }

        let scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| decode_error(format!("Failed to create scaler: {e}")))?;

        Ok(Self {
            path: path_buf,
            input_context,
            decoder,
            scaler,
            video_stream_index,
            metadata: VideoMetadata::new(width, height, fps),
            eof_sent: false,
        })
    }

    fn decode_error(&self, message: String) -> AssetLoadError {
        AssetLoadError::Decode {
            path: self.path.clone(),
            message,
        }
    }

    /// Scales a decoded frame to RGBA.
    fn convert(&mut self, decoded: &ffmpeg_next::frame::Video) -> Result<RawImage, AssetLoadError> {
        let mut rgba_frame = ffmpeg_next::frame::Video::empty();
        self.scaler
            .run(decoded, &mut rgba_frame)
            .map_err(|e| self.decode_error(format!("Scaling failed: {e}")))?;
        Ok(RawImage::from_rgba(
            rgba_frame.width(),
            rgba_frame.height(),
            extract_rgba_data(&rgba_frame),
        ))
    }
}

impl FrameStream for FfmpegStream {
    fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    fn next_frame(&mut self) -> Result<Option<RawImage>, AssetLoadError> {
        let mut decoded = ffmpeg_next::frame::Video::empty();

        // Frames already buffered in the decoder come first
        if self.decoder.receive_frame(&mut decoded).is_ok() {
            return self.convert(&decoded).map(Some);
        }
        if self.eof_sent {
            return Ok(None);
        }

        loop {
            let video_stream_index = self.video_stream_index;
            let packet = self
                .input_context
                .packets()
                .find(|(stream, _)| stream.index() == video_stream_index)
                .map(|(_, packet)| packet);

            match packet {
                Some(packet) => {
                    self.decoder
                        .send_packet(&packet)
                        .map_err(|e| self.decode_error(format!("Packet send failed: {e}")))?;
                    if self.decoder.receive_frame(&mut decoded).is_ok() {
                        return self.convert(&decoded).map(Some);
                    }
                }
                None => {
                    // Flush frames held back by the decoder
                    self.eof_sent = true;
                    self.decoder
                        .send_eof()
                        .map_err(|e| self.decode_error(format!("Decoder flush failed: {e}")))?;
                    if self.decoder.receive_frame(&mut decoded).is_ok() {
                        return self.convert(&decoded).map(Some);
                    }
                    return Ok(None);
                }
            }
        }
    }
}

/// Extracts RGBA data from a scaled frame, handling stride correctly.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let row_start = y * stride;
        rgba_bytes.extend_from_slice(&data[row_start..row_start + width * 4]);
    }
    rgba_bytes
}
