use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for request-dispatch operations
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Errors raised while configuring the dispatcher or touching its collaborators.
///
/// None of these ever escape `RequestDispatcher::dispatch`; a request that
/// cannot be issued is reported to the caller as a transport failure.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid HTTP method: {method}")]
    InvalidMethod { method: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DispatchError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new invalid method error
    pub fn invalid_method<S: Into<String>>(method: S) -> Self {
        Self::InvalidMethod {
            method: method.into(),
        }
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
