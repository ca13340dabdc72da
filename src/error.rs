//! Unified error type.

use thiserror::Error;

/// The error type returned by lingo's fallible operations.
///
/// Locale resolution itself never fails: every request maps to a locale.
/// Application-level errors (404, 422, etc.) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure and startup failures: binding a port, accepting a
/// connection, or loading a bad configuration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid socket address `{0}`")]
    InvalidAddress(String),

    #[error("method `{0}` not allowed")]
    MethodNotAllowed(String),
}

/// Why a locale configuration or settings file was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("at least one locale must be configured")]
    NoLocales,

    #[error("invalid locale code `{0}`")]
    InvalidLocale(String),

    #[error("locale `{0}` is listed more than once")]
    DuplicateLocale(String),

    #[error("default locale `{0}` is not among the configured locales")]
    UnknownDefault(String),

    #[error("invalid header name `{0}`")]
    InvalidHeaderName(String),
}
