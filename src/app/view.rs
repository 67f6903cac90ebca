// SPDX-License-Identifier: MPL-2.0
//! Renders the current screen with the toast overlay on top.

use super::{Message, Screen};
use crate::config::Config;
use crate::domain::media::MediaKind;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::{interval_prompt, slideshow, viewer};
use iced::widget::Stack;
use iced::{Element, Length};

use super::frontend::IcedFrontend;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub screen: Screen,
    pub kind: MediaKind,
    pub viewer: &'a IcedFrontend,
    pub slideshow: &'a IcedFrontend,
    pub position: Option<(usize, usize)>,
    pub has_items: bool,
    pub interval_input: &'a str,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current: Element<'_, Message> = match ctx.screen {
        Screen::Viewer => viewer::view(viewer::ViewContext {
            i18n: ctx.i18n,
            kind: ctx.kind,
            picture: ctx.viewer.picture(),
            metadata: ctx.viewer.metadata(),
            position: ctx.position,
            has_items: ctx.has_items,
            metadata_bar_height: ctx.config.display.metadata_bar_height(),
            navigation_bar_height: ctx.config.display.navigation_bar_height(),
        })
        .map(Message::Viewer),
        Screen::IntervalPrompt => interval_prompt::view(
            ctx.i18n,
            ctx.interval_input,
            ctx.config.slideshow.default_interval().seconds(),
        )
        .map(Message::Prompt),
        Screen::Slideshow => slideshow::view(slideshow::ViewContext {
            i18n: ctx.i18n,
            picture: ctx.slideshow.picture(),
            metadata: ctx.slideshow.metadata(),
            reserved_height: ctx.config.slideshow.reserved_height(),
        }),
    };

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
