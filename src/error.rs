// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy shared by the viewers.
//!
//! None of these errors is fatal: manifest failures reset the collection,
//! asset failures keep the current display, and interval input errors are
//! replaced by the default interval.

use std::path::PathBuf;

/// Failure to turn a manifest file into a collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file is missing or unreadable.
    #[error("cannot read manifest {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// XML syntax error, missing root element or truncated document.
    #[error("malformed manifest: {0}")]
    Malformed(String),

    /// A required entry element is absent (or empty, for asset paths).
    #[error("entry {entry} is missing required field <{field}>")]
    MissingField { entry: usize, field: &'static str },

    /// A field is present but its value cannot be interpreted.
    #[error("entry {entry} has invalid <{field}> value {value:?}")]
    InvalidField {
        entry: usize,
        field: &'static str,
        value: String,
    },
}

impl ManifestError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::Io { .. } => "error-manifest-io",
            Self::Malformed(_) => "error-manifest-malformed",
            Self::MissingField { .. } => "error-manifest-missing-field",
            Self::InvalidField { .. } => "error-manifest-invalid-field",
        }
    }
}

/// Failure to decode an image file or a video frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetLoadError {
    /// File not found, permission denied, and similar I/O failures.
    #[error("cannot read {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// The file exists but its content cannot be decoded.
    #[error("cannot decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// No decoder is available for the file's codec or format.
    #[error("unsupported codec in {path}: {codec}")]
    UnsupportedCodec { path: PathBuf, codec: String },

    /// The container holds no video stream.
    #[error("no video stream in {path}")]
    NoVideoStream { path: PathBuf },
}

impl AssetLoadError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::Io { .. } => "error-asset-io",
            Self::Decode { .. } => "error-asset-decode",
            Self::UnsupportedCodec { .. } => "error-asset-unsupported-codec",
            Self::NoVideoStream { .. } => "error-asset-no-video-stream",
        }
    }

    /// Path of the asset that failed to load.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. }
            | Self::Decode { path, .. }
            | Self::UnsupportedCodec { path, .. }
            | Self::NoVideoStream { path } => path,
        }
    }
}

/// Rejected slideshow interval input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigInputError {
    #[error("interval {0:?} is not a whole number of seconds")]
    NotANumber(String),

    #[error("interval {value} is outside {min}..={max} seconds")]
    OutOfRange { value: i64, min: u32, max: u32 },
}

/// Crate-level error used by configuration loading and application plumbing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Asset(#[from] AssetLoadError),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
