// SPDX-License-Identifier: MPL-2.0
//! Metadata shown under the current item.

use super::collection::MediaRecord;

/// Text shown in the metadata bar.
///
/// Absent fields are `None` and render as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataPayload {
    pub caption: String,
    pub date: Option<String>,
    pub location: Option<String>,
    /// Formatted as `"ASA: {value}"`.
    pub sensitivity_label: Option<String>,
    /// Formatted as `"{index} of {total}"`.
    pub sequence_label: Option<String>,
}

/// Caption shown once a video has played to the end.
pub const PLAYBACK_ENDED_CAPTION: &str = "Video playback ended.";

impl MetadataPayload {
    /// Builds the payload for a record.
    #[must_use]
    pub fn for_record(record: &MediaRecord) -> Self {
        let mut payload = Self {
            caption: record.caption().to_owned(),
            date: record.date().map(str::to_owned),
            location: record.location().map(str::to_owned),
            ..Self::default()
        };

        if let Some(image) = record.as_image() {
            payload.sensitivity_label = image
                .sensitivity
                .as_deref()
                .map(|asa| format!("ASA: {asa}"));
            payload.sequence_label = match (image.sequence_index, image.sequence_total) {
                (Some(index), Some(total)) => Some(format!("{index} of {total}")),
                _ => None,
            };
        }

        payload
    }

    /// Payload shown after the last frame of a video.
    #[must_use]
    pub fn playback_ended() -> Self {
        Self {
            caption: PLAYBACK_ENDED_CAPTION.to_owned(),
            ..Self::default()
        }
    }

    /// Text for an optional field; absent fields are empty.
    #[must_use]
    pub fn text(field: Option<&String>) -> &str {
        field.map_or("", String::as_str)
    }
}
