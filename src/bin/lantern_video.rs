// SPDX-License-Identifier: MPL-2.0
//! Video collection viewer.
//!
//! Usage: `lantern-video [MANIFEST]`

use lantern::app::{self, Flags};
use lantern::application::browser::VideoBrowser;
use lantern::infrastructure::ffmpeg::FfmpegBackend;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = lantern::media::init_ffmpeg() {
        log::error!("{err}");
    }

    let args = pico_args::Arguments::from_env();
    let flags = Flags {
        manifest: args.finish().into_iter().next().map(Into::into),
    };

    app::run(flags, |config| {
        VideoBrowser::new(FfmpegBackend, config.video.timing())
    })
}
