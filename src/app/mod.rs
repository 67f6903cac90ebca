// SPDX-License-Identifier: MPL-2.0
//! Iced application shell shared by the photo and video viewers.
//!
//! The `App` owns a [`Browser`] and the iced frontends implementing the
//! display and scheduler ports, and translates messages into browser and
//! slideshow calls. The two binaries only differ in the browser they pass
//! to [`run`].

mod frontend;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use frontend::IcedFrontend;
pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::browser::Browser;
use crate::application::slideshow::Slideshow;
use crate::config::{self, Config};
use crate::domain::media::MediaKind;
use crate::domain::playback::Generation;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::notifications::{self, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Root application state.
pub struct App<Br: Browser> {
    i18n: I18n,
    config: Config,
    screen: Screen,
    browser: Br,
    /// Surface of the windowed viewer.
    viewer: IcedFrontend,
    slideshow: Option<Slideshow>,
    /// Generation handed to the most recent slideshow.
    slideshow_generation: Generation,
    /// Surface of the fullscreen slideshow.
    slideshow_frontend: IcedFrontend,
    interval_input: String,
    window_id: Option<window::Id>,
    fullscreen: bool,
    notifications: notifications::Manager,
}

impl<Br: Browser> fmt::Debug for App<Br> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("kind", &Br::KIND)
            .field("screen", &self.screen)
            .field("items", &self.browser.collection().len())
            .finish_non_exhaustive()
    }
}

/// Loads the configured window icon.
fn load_window_icon(path: &Path) -> Option<window::Icon> {
    let image = media::load_image(path)
        .map_err(|err| log::warn!("Cannot load window icon: {err}"))
        .ok()?;
    window::icon::from_rgba(image.rgba_bytes().to_vec(), image.width(), image.height())
        .map_err(|err| log::warn!("Invalid window icon {}: {err}", path.display()))
        .ok()
}

fn window_settings(icon: Option<window::Icon>) -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon,
        ..window::Settings::default()
    }
}

/// Runs a viewer until its window is closed.
///
/// `make_browser` builds the browser from the loaded configuration.
pub fn run<Br, F>(flags: Flags, make_browser: F) -> iced::Result
where
    Br: Browser + 'static,
    F: Fn(&Config) -> Br + 'static,
{
    let (config, config_warning) = config::load();
    let mut warnings: Vec<String> = config_warning.into_iter().collect();

    let icon = config.display.window_icon.as_deref().and_then(|path| {
        let icon = load_window_icon(path);
        if icon.is_none() {
            warnings.push("notification-window-icon-error".to_owned());
        }
        icon
    });

    let boot = move || {
        let browser = make_browser(&config);
        App::new(flags.clone(), config.clone(), &warnings, browser)
    };

    iced::application(boot, App::<Br>::update, App::<Br>::view)
        .title(App::<Br>::title)
        .theme(App::<Br>::theme)
        .window(window_settings(icon))
        .subscription(App::<Br>::subscription)
        .run()
}

impl<Br: Browser> App<Br> {
    fn new(flags: Flags, config: Config, warnings: &[String], browser: Br) -> (Self, Task<Message>) {
        let mut app = Self {
            i18n: I18n::new(&config),
            config,
            screen: Screen::default(),
            browser,
            viewer: IcedFrontend::default(),
            slideshow: None,
            slideshow_generation: Generation::new(),
            slideshow_frontend: IcedFrontend::default(),
            interval_input: String::new(),
            window_id: None,
            fullscreen: false,
            notifications: notifications::Manager::new(),
        };

        for key in warnings {
            app.notifications.push(Notification::warning(key.as_str()));
        }

        let task = match flags.manifest {
            Some(path) => app.open_manifest(&path),
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        let collection = self.browser.collection();
        if collection.title() == Br::KIND.default_title() {
            match Br::KIND {
                MediaKind::Image => self.i18n.tr("default-image-title"),
                MediaKind::Video => self.i18n.tr("default-video-title"),
            }
        } else {
            collection.title().to_owned()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Key(key) => self.handle_key(key),
            Message::Viewer(message) => self.handle_viewer_message(message),
            Message::Prompt(message) => self.handle_prompt_message(message),
            Message::WindowResized { window, size } => self.handle_resize(window, size),
            Message::Tick(tick) => self.handle_tick(tick),
            Message::ManifestPicked(path) => self.handle_manifest_picked(path),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            screen: self.screen,
            kind: Br::KIND,
            viewer: &self.viewer,
            slideshow: &self.slideshow_frontend,
            position: self.browser.displayed_position(),
            has_items: !self.browser.collection().is_empty(),
            interval_input: &self.interval_input,
            notifications: &self.notifications,
        })
    }
}
