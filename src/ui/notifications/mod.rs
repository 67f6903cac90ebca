// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Manifest and asset errors, settings warnings and informational messages
//! are shown as toasts in the bottom-right corner without blocking input.
//! Success and info toasts disappear after 3 seconds, warnings after 5,
//! errors stay until dismissed. At most three are visible at once.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
