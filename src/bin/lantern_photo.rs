// SPDX-License-Identifier: MPL-2.0
//! Photo collection viewer.
//!
//! Usage: `lantern-photo [MANIFEST]`

use lantern::app::{self, Flags};
use lantern::application::browser::ImageBrowser;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = pico_args::Arguments::from_env();
    let flags = Flags {
        manifest: args.finish().into_iter().next().map(Into::into),
    };

    app::run(flags, |_config| ImageBrowser::new())
}
