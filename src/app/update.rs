// SPDX-License-Identifier: MPL-2.0
//! Message handlers.
//!
//! Every handler that may reach a controller ends by turning the ticks the
//! controller scheduled into timer tasks.

use super::{App, Message, Screen};
use crate::application::browser::Browser;
use crate::application::port::{Surface, Tick, TickKind};
use crate::application::router::{self, NavCommand, NavKey};
use crate::application::slideshow::{interval_or_default, Slideshow};
use crate::domain::playback::SlideshowInterval;
use crate::domain::viewport::Viewport;
use crate::error::Error;
use crate::ui::interval_prompt;
use crate::ui::notifications::Notification;
use crate::ui::viewer;
use iced::{window, Size, Task};
use std::path::{Path, PathBuf};

/// Window size in whole pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_pixels(size: Size) -> (u32, u32) {
    (size.width.max(0.0) as u32, size.height.max(0.0) as u32)
}

impl<Br: Browser> App<Br> {
    pub(super) fn handle_key(&mut self, key: NavKey) -> Task<Message> {
        match self.screen.route_context() {
            Some(context) => match router::route_key(key, context) {
                Some(command) => self.handle_command(command),
                None => Task::none(),
            },
            None if key == NavKey::Escape => self.handle_prompt_message(interval_prompt::Message::Cancel),
            None => Task::none(),
        }
    }

    pub(super) fn handle_viewer_message(&mut self, message: viewer::Message) -> Task<Message> {
        if self.screen != Screen::Viewer {
            return Task::none();
        }
        match message {
            viewer::Message::Navigate(action) => self.handle_command(router::route_button(action)),
            viewer::Message::Open => self.open_dialog(),
            viewer::Message::Reset => {
                self.browser.reset(&mut self.viewer);
                self.notifications
                    .push(Notification::info("notification-collection-reset"));
                self.viewer.take_tasks()
            }
            viewer::Message::StartSlideshow => {
                if !self.browser.collection().is_empty() {
                    self.interval_input.clear();
                    self.screen = Screen::IntervalPrompt;
                }
                Task::none()
            }
        }
    }

    pub(super) fn handle_prompt_message(&mut self, message: interval_prompt::Message) -> Task<Message> {
        if self.screen != Screen::IntervalPrompt {
            return Task::none();
        }
        let default = self.config.slideshow.default_interval();
        match message {
            interval_prompt::Message::InputChanged(input) => {
                self.interval_input = input;
                Task::none()
            }
            interval_prompt::Message::Confirm => {
                let interval = interval_or_default(Some(&self.interval_input), default);
                self.start_slideshow(interval)
            }
            interval_prompt::Message::Cancel => self.start_slideshow(interval_or_default(None, default)),
        }
    }

    pub(super) fn handle_resize(&mut self, window: window::Id, size: Size) -> Task<Message> {
        self.window_id = Some(window);
        let (width, height) = whole_pixels(size);

        let viewer_viewport = Viewport::from_area(width, height, self.config.display.reserved_height());
        if self.viewer.set_viewport(viewer_viewport) {
            self.browser.refresh(&mut self.viewer);
        }

        let slideshow_viewport =
            Viewport::from_area(width, height, self.config.slideshow.reserved_height());
        if self.slideshow_frontend.set_viewport(slideshow_viewport) {
            if let Some(slideshow) = self.slideshow.as_mut() {
                slideshow.refresh(&mut self.slideshow_frontend);
            }
        }
        Task::none()
    }

    pub(super) fn handle_tick(&mut self, tick: Tick) -> Task<Message> {
        match tick.kind {
            TickKind::SlideAdvance => {
                let Some(slideshow) = self.slideshow.as_mut() else {
                    return Task::none();
                };
                if let Err(err) = slideshow.on_tick(tick, &mut self.slideshow_frontend) {
                    self.notifications.push(Notification::asset_error(&err));
                }
                self.slideshow_frontend.take_tasks()
            }
            TickKind::FramePull | TickKind::VideoStart => {
                if let Err(err) = self.browser.on_tick(tick, &mut self.viewer) {
                    self.notifications.push(Notification::asset_error(&err));
                }
                self.viewer.take_tasks()
            }
        }
    }

    pub(super) fn handle_manifest_picked(&mut self, path: Option<PathBuf>) -> Task<Message> {
        match path {
            Some(path) => self.open_manifest(&path),
            None => Task::none(),
        }
    }

    /// Opens a manifest and reports the outcome as a toast.
    pub(super) fn open_manifest(&mut self, path: &Path) -> Task<Message> {
        match self.browser.open(path, &mut self.viewer) {
            Ok(()) => {
                self.notifications.clear_asset_errors();
                let collection = self.browser.collection();
                let notification = if collection.is_empty() {
                    Notification::warning("notification-collection-empty")
                } else {
                    Notification::info("notification-collection-loaded")
                        .with_arg("count", collection.len().to_string())
                        .with_arg("title", collection.title())
                };
                self.notifications.push(notification);
            }
            Err(Error::Manifest(err)) => self.notifications.push(Notification::manifest_error(&err)),
            Err(Error::Asset(err)) => self.notifications.push(Notification::asset_error(&err)),
            Err(err) => log::error!("Failed to open {}: {err}", path.display()),
        }
        self.viewer.take_tasks()
    }

    fn handle_command(&mut self, command: NavCommand) -> Task<Message> {
        if command == NavCommand::StopSlideshow {
            return self.stop_slideshow();
        }
        if let Err(err) = self.browser.navigate(command, &mut self.viewer) {
            self.notifications.push(Notification::asset_error(&err));
        }
        self.viewer.take_tasks()
    }

    fn open_dialog(&self) -> Task<Message> {
        let filter_name = self.i18n.tr("dialog-manifest-filter");
        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .add_filter(filter_name, &["xml"])
                    .pick_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            Message::ManifestPicked,
        )
    }

    fn start_slideshow(&mut self, interval: SlideshowInterval) -> Task<Message> {
        self.slideshow_generation = self.slideshow_generation.next();
        let mut slideshow = Slideshow::new(
            self.browser.collection().records(),
            interval,
            self.slideshow_generation,
        );
        self.slideshow_frontend.clear();
        if let Err(err) = slideshow.start(&mut self.slideshow_frontend) {
            self.notifications.push(Notification::asset_error(&err));
        }
        self.slideshow = Some(slideshow);
        self.screen = Screen::Slideshow;
        Task::batch([
            self.set_fullscreen(true),
            self.slideshow_frontend.take_tasks(),
        ])
    }

    fn stop_slideshow(&mut self) -> Task<Message> {
        if let Some(mut slideshow) = self.slideshow.take() {
            slideshow.stop();
        }
        self.slideshow_frontend.clear();
        self.slideshow_frontend.drain_pending();
        self.screen = Screen::Viewer;
        self.set_fullscreen(false)
    }

    fn set_fullscreen(&mut self, desired: bool) -> Task<Message> {
        if self.fullscreen == desired {
            return Task::none();
        }
        let Some(window_id) = self.window_id else {
            return Task::none();
        };
        self.fullscreen = desired;
        let mode = if desired {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(window_id, mode)
    }
}
