// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale detection from config or system settings
//! - `.ftl` translation files embedded at build time
//! - Fallback to `en-US` when a translation is missing

pub mod fluent;

pub use fluent::I18n;
