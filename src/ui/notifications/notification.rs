// SPDX-License-Identifier: MPL-2.0
//! Notification values and their severities.

use crate::error::{AssetLoadError, ManifestError};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level; drives the accent colour and how long the toast stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns `None` when the toast must be dismissed by hand.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }

    /// Glyph drawn at the left of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }
}

/// A message for the user, stored as an i18n key plus its arguments so it
/// is translated at render time.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Error toast describing why a manifest could not be opened.
    #[must_use]
    pub fn manifest_error(err: &ManifestError) -> Self {
        let notification = Self::error(err.i18n_key());
        match err {
            ManifestError::Io { path, message } => notification
                .with_arg("path", path.display().to_string())
                .with_arg("message", message.as_str()),
            ManifestError::Malformed(message) => notification.with_arg("message", message.as_str()),
            ManifestError::MissingField { entry, field } => notification
                .with_arg("entry", entry.to_string())
                .with_arg("field", *field),
            ManifestError::InvalidField {
                entry,
                field,
                value,
            } => notification
                .with_arg("entry", entry.to_string())
                .with_arg("field", *field)
                .with_arg("value", value.as_str()),
        }
    }

    /// Error toast naming the asset that failed to load.
    #[must_use]
    pub fn asset_error(err: &AssetLoadError) -> Self {
        let file_name = err
            .path()
            .file_name()
            .map_or_else(|| err.path().display().to_string(), |name| name.to_string_lossy().into_owned());
        Self::error(err.i18n_key()).with_arg("path", file_name)
    }

    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether the toast has been on screen longer than its severity allows.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|duration| now.saturating_duration_since(self.created_at) >= duration)
    }
}
