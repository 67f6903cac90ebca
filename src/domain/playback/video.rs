// SPDX-License-Identifier: MPL-2.0
//! Video playback state machine.

/// Represents the current playback state of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoState {
    /// No session, nothing scheduled.
    #[default]
    Idle,
    /// A frame stream is open and frames are being pulled.
    Playing,
    /// The stream ran out of frames.
    Ended,
    /// The session was cut short by navigation, reset or an error.
    Aborted,
}

impl VideoState {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}
