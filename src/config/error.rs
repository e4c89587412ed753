//! Failure modes of configuration loading and validation.

use thiserror::Error;

/// Why `AppConfig::load()` or a later check failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("configuration rejected: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A setting that parsed but cannot work.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("API base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("CSRF cookie name must not be empty")]
    MissingCsrfCookieName,

    #[error("CSRF header name must not be empty")]
    MissingCsrfHeaderName,

    #[error("session file path must not be empty")]
    InvalidSessionFile,
}
