// SPDX-License-Identifier: MPL-2.0
//! Maps keys and buttons to navigation commands.

/// Keys the viewers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Escape,
}

/// Buttons of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Back,
    Home,
    Forward,
}

/// Which screen receives the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteContext {
    Viewer,
    Slideshow,
}

/// A collection operation requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Previous,
    Next,
    Home,
    StopSlideshow,
}

/// Routes a key press.
///
/// Escape goes home in the viewer and stops a running slideshow. Arrow keys
/// are ignored while the slideshow is running.
#[must_use]
pub fn route_key(key: NavKey, context: RouteContext) -> Option<NavCommand> {
    match (context, key) {
        (RouteContext::Viewer, NavKey::Left) => Some(NavCommand::Previous),
        (RouteContext::Viewer, NavKey::Right) => Some(NavCommand::Next),
        (RouteContext::Viewer, NavKey::Escape) => Some(NavCommand::Home),
        (RouteContext::Slideshow, NavKey::Escape) => Some(NavCommand::StopSlideshow),
        (RouteContext::Slideshow, _) => None,
    }
}

/// Routes a navigation bar button.
#[must_use]
pub fn route_button(action: ButtonAction) -> NavCommand {
    match action {
        ButtonAction::Back => NavCommand::Previous,
        ButtonAction::Home => NavCommand::Home,
        ButtonAction::Forward => NavCommand::Next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_keys() {
        assert_eq!(
            route_key(NavKey::Left, RouteContext::Viewer),
            Some(NavCommand::Previous)
        );
        assert_eq!(
            route_key(NavKey::Right, RouteContext::Viewer),
            Some(NavCommand::Next)
        );
        assert_eq!(
            route_key(NavKey::Escape, RouteContext::Viewer),
            Some(NavCommand::Home)
        );
    }

    #[test]
    fn slideshow_only_listens_to_escape() {
        assert_eq!(
            route_key(NavKey::Escape, RouteContext::Slideshow),
            Some(NavCommand::StopSlideshow)
        );
        assert_eq!(route_key(NavKey::Left, RouteContext::Slideshow), None);
        assert_eq!(route_key(NavKey::Right, RouteContext::Slideshow), None);
    }

    #[test]
    fn buttons_match_keys() {
        assert_eq!(route_button(ButtonAction::Back), NavCommand::Previous);
        assert_eq!(route_button(ButtonAction::Home), NavCommand::Home);
        assert_eq!(route_button(ButtonAction::Forward), NavCommand::Next);
    }
}
