// SPDX-License-Identifier: MPL-2.0
//! Screens of a viewer window.

use crate::application::router::RouteContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Windowed viewer with metadata and navigation bars.
    #[default]
    Viewer,
    /// Asking for the slideshow interval.
    IntervalPrompt,
    /// Fullscreen slideshow.
    Slideshow,
}

impl Screen {
    /// Context used to route navigation keys, if the screen takes any.
    #[must_use]
    pub fn route_context(self) -> Option<RouteContext> {
        match self {
            Screen::Viewer => Some(RouteContext::Viewer),
            Screen::Slideshow => Some(RouteContext::Slideshow),
            Screen::IntervalPrompt => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_takes_no_navigation_keys() {
        assert_eq!(Screen::default(), Screen::Viewer);
        assert_eq!(Screen::IntervalPrompt.route_context(), None);
        assert_eq!(
            Screen::Slideshow.route_context(),
            Some(RouteContext::Slideshow)
        );
    }
}
