// SPDX-License-Identifier: MPL-2.0
//! FFmpeg library initialisation.

use crate::error::{Error, Result};
use std::sync::Once;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with appropriate log level.
///
/// Safe to call multiple times; only the first call does any work. The
/// FFmpeg log level is set to ERROR so container warnings do not flood the
/// terminal.
///
/// # Errors
///
/// Returns [`Error::Config`] if the first initialisation fails.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Config(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        assert!(init_ffmpeg().is_ok());
        assert!(init_ffmpeg().is_ok());
    }
}
