//! Error types for the DataBeaver client.
//!
//! Every failure the client can surface is unified into a single `DbvError`
//! enum. An upstream 404 gets its own variant so singular lookups can turn it
//! into an absence value; everything else reaches the caller unchanged.

use thiserror::Error;

/// Convenience type alias for Results using DbvError.
pub type DbvResult<T> = Result<T, DbvError>;

/// Unified error type covering all error categories in the client.
#[derive(Error, Debug)]
pub enum DbvError {
    // -- Configuration errors --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    /// The configured base URL could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    // -- Network errors --
    /// HTTP request failed before a status was received.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Server answered 404.
    #[error("not found: {url}")]
    NotFound {
        /// Request URL, without query string.
        url: String,
    },

    /// Server rejected the API key.
    #[error("authentication failed (status {status}): {message}")]
    AuthFailed {
        /// HTTP status code (401 or 403).
        status: u16,
        /// Response body from the server.
        message: String,
    },

    /// Server returned any other non-success status.
    #[error("server error (status {status}): {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Response body from the server.
        message: String,
    },

    // -- Data errors --
    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DbvError {
    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            DbvError::NotFound { .. } => Some(404),
            DbvError::AuthFailed { status, .. } | DbvError::ServerError { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Whether this error is an upstream 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbvError::NotFound { .. })
    }
}

impl From<serde_json::Error> for DbvError {
    fn from(e: serde_json::Error) -> Self {
        DbvError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for DbvError {
    fn from(e: toml::de::Error) -> Self {
        DbvError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for DbvError {
    fn from(e: toml::ser::Error) -> Self {
        DbvError::Config(e.to_string())
    }
}
