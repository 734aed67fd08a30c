//! Error types for the core crate.
//!
//! Most failures here are recoverable by design of the site: callers log
//! them and fall back to defaults instead of failing a page render.

use std::path::PathBuf;

use thiserror::Error;

/// A locale code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The code is not one of the supported locales.
    #[error("unsupported locale code: {0:?}")]
    Unsupported(String),
}

/// Problems loading or validating a message bundle.
#[derive(Debug, Error)]
pub enum MessagesError {
    /// The bundle is not valid JSON.
    #[error("failed to parse message bundle: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required key has no entry in the bundle.
    #[error("message bundle is missing key {0}")]
    MissingKey(&'static str),

    /// A required key points at something other than a string.
    #[error("message key {0} is not a string")]
    NotAString(&'static str),

    /// The bundle file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Bundle path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Problems loading the TOML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`crate::SiteConfig`].
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}
