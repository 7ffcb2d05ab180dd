// src/error.rs

//! Unified error handling for the hot-list fetcher.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for hot-list operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// No complete response within the deadline
    #[error("request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    /// Response body is not valid JSON
    #[error("JSON parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid response, but nothing could be extracted from it
    #[error("no hot-list entries in response")]
    EmptyList,

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Map a reqwest failure, keeping client-side timeouts in the timeout bucket.
    pub(crate) fn from_request(error: reqwest::Error, deadline: Duration) -> Self {
        if error.is_timeout() {
            Self::Timeout(deadline)
        } else {
            Self::Network(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_deadline() {
        let err = AppError::Timeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "request timed out after 10s");
    }

    #[test]
    fn parse_error_wraps_diagnostic() {
        let cause = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let diagnostic = cause.to_string();
        let err = AppError::from(cause);
        assert!(matches!(err, AppError::Parse(_)));
        assert!(err.to_string().contains(&diagnostic));
    }
}
