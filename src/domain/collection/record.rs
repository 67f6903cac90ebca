// SPDX-License-Identifier: MPL-2.0
//! Media records described by a manifest entry.

use std::path::{Path, PathBuf};

/// One `<picture>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageRecord {
    /// Resolved path of the image file.
    pub path: PathBuf,
    pub caption: String,
    pub date: Option<String>,
    pub location: Option<String>,
    /// Film sensitivity (ASA), kept verbatim.
    pub sensitivity: Option<String>,
    /// Frame number on the roll.
    pub sequence_index: Option<u32>,
    /// Number of frames on the roll.
    pub sequence_total: Option<u32>,
}

/// One `<video>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoRecord {
    /// Resolved path of the video file.
    pub path: PathBuf,
    pub caption: String,
    pub date: Option<String>,
    pub location: Option<String>,
}

/// A collection entry of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRecord {
    Image(ImageRecord),
    Video(VideoRecord),
}

impl MediaRecord {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Image(record) => &record.path,
            Self::Video(record) => &record.path,
        }
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        match self {
            Self::Image(record) => &record.caption,
            Self::Video(record) => &record.caption,
        }
    }

    #[must_use]
    pub fn date(&self) -> Option<&str> {
        match self {
            Self::Image(record) => record.date.as_deref(),
            Self::Video(record) => record.date.as_deref(),
        }
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Image(record) => record.location.as_deref(),
            Self::Video(record) => record.location.as_deref(),
        }
    }

    /// Returns the image record, if this is a picture entry.
    #[must_use]
    pub fn as_image(&self) -> Option<&ImageRecord> {
        match self {
            Self::Image(record) => Some(record),
            Self::Video(_) => None,
        }
    }

    /// Returns the video record, if this is a video entry.
    #[must_use]
    pub fn as_video(&self) -> Option<&VideoRecord> {
        match self {
            Self::Video(record) => Some(record),
            Self::Image(_) => None,
        }
    }
}

impl From<ImageRecord> for MediaRecord {
    fn from(record: ImageRecord) -> Self {
        Self::Image(record)
    }
}

impl From<VideoRecord> for MediaRecord {
    fn from(record: VideoRecord) -> Self {
        Self::Video(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_cover_both_kinds() {
        let image: MediaRecord = ImageRecord {
            path: PathBuf::from("/photos/a.jpg"),
            caption: "Harbour".into(),
            date: Some("1998".into()),
            ..ImageRecord::default()
        }
        .into();
        let video: MediaRecord = VideoRecord {
            path: PathBuf::from("/clips/b.mp4"),
            caption: "Wedding".into(),
            location: Some("Lyon".into()),
            ..VideoRecord::default()
        }
        .into();

        assert_eq!(image.path(), Path::new("/photos/a.jpg"));
        assert_eq!(image.caption(), "Harbour");
        assert_eq!(image.date(), Some("1998"));
        assert_eq!(image.location(), None);
        assert!(image.as_image().is_some());
        assert!(image.as_video().is_none());

        assert_eq!(video.location(), Some("Lyon"));
        assert!(video.as_video().is_some());
    }
}
