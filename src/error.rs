//! Error types for the Alpha Radar dashboard.

use thiserror::Error;

/// The main error type for Alpha Radar.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP errors (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a status error for a feed URL.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Whether this error is one of the ways a feed fetch can fail.
    ///
    /// The dashboard does not distinguish between these causes; they all
    /// surface as the same panel-level error state.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Status { .. } | Self::Serialization(_)
        )
    }
}

impl From<::config::ConfigError> for Error {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_classification() {
        assert!(Error::status("http://localhost:5000/api/narrative", 503).is_fetch_failure());

        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(Error::from(parse).is_fetch_failure());

        assert!(!Error::config("bad mode").is_fetch_failure());
    }

    #[test]
    fn test_status_display() {
        let err = Error::status("http://localhost:8080/api/alerts", 500);
        assert_eq!(
            err.to_string(),
            "http://localhost:8080/api/alerts returned status 500"
        );
    }
}
