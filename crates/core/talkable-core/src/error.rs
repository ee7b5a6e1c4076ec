//! Error types for Talkable

use thiserror::Error;

/// Main error type for Talkable operations
#[derive(Debug, Error)]
pub enum TalkableError {
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Service error
    #[error("Service error: {0}")]
    Service(String),

    /// Non-success response from an external collaborator
    #[error("Upstream error ({status}): {message}")]
    Upstream {
        /// HTTP status code returned by the upstream service
        status: u16,
        /// Upstream response body, as text
        message: String,
    },

    /// Not found error (generic)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type using TalkableError
pub type Result<T> = std::result::Result<T, TalkableError>;

impl TalkableError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        TalkableError::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        TalkableError::Validation(msg.into())
    }

    /// Create a service error
    pub fn service(msg: impl Into<String>) -> Self {
        TalkableError::Service(msg.into())
    }

    /// Create an upstream error from a status code and response body
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        TalkableError::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        TalkableError::NotFound(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        TalkableError::Other(msg.into())
    }

    /// Upstream status code, when this error carries one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            TalkableError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = TalkableError::config("missing backend URL");
        assert_eq!(err.to_string(), "Configuration error: missing backend URL");

        let err = TalkableError::service("bind failed");
        assert_eq!(err.to_string(), "Service error: bind failed");
    }

    #[test]
    fn test_upstream_error() {
        let err = TalkableError::upstream(502, "bad gateway");
        assert_eq!(err.to_string(), "Upstream error (502): bad gateway");
        assert_eq!(err.upstream_status(), Some(502));

        let err = TalkableError::other("anything");
        assert_eq!(err.upstream_status(), None);
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
