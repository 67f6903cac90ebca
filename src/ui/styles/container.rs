// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Bar under the viewport (metadata, navigation).
///
/// Derived from the theme background so it reads in light and dark modes.
pub fn bar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        ..Default::default()
    }
}

/// Black backdrop of the fullscreen slideshow.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::GRAY_100),
        ..Default::default()
    }
}

/// Floating dialog card.
pub fn dialog(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::LG.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
