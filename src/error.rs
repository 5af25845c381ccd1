//! Error types for QKart
//!
//! Every failure the catalog fetcher can produce, plus configuration and
//! terminal setup errors.

use thiserror::Error;

/// Message shown for any failure that does not carry a backend message.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong. Check that the backend is running, reachable and returns valid JSON.";

/// Main error type for QKart operations
#[derive(Error, Debug)]
pub enum QkartError {
    #[error("Backend error (status {status}): {message}")]
    Backend { status: u16, message: String },

    #[error("No products matched")]
    NotFound,

    #[error("Unexpected HTTP status {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for QKart operations
pub type Result<T> = std::result::Result<T, QkartError>;

impl QkartError {
    /// Whether the backend answered 404, which search treats as "no matches"
    pub fn is_not_found(&self) -> bool {
        matches!(self, QkartError::NotFound)
    }

    /// Text for the error notification raised when a full catalog load fails.
    ///
    /// Structured backend errors surface their own message; everything else
    /// gets the generic hint.
    pub fn user_message(&self) -> &str {
        match self {
            QkartError::Backend { message, .. } if !message.is_empty() => message,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for QkartError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            QkartError::Parse(err.to_string())
        } else {
            QkartError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for QkartError {
    fn from(err: serde_json::Error) -> Self {
        QkartError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_surface_their_message() {
        let err = QkartError::Backend {
            status: 500,
            message: "Something went wrong. Check the backend console for more details".into(),
        };
        assert_eq!(
            err.user_message(),
            "Something went wrong. Check the backend console for more details"
        );
    }

    #[test]
    fn unstructured_errors_fall_back_to_generic_message() {
        assert_eq!(
            QkartError::Network("connection refused".into()).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
        assert_eq!(
            QkartError::Http { status: 502 }.user_message(),
            GENERIC_FAILURE_MESSAGE
        );
        let empty = QkartError::Backend {
            status: 400,
            message: String::new(),
        };
        assert_eq!(empty.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn only_404_counts_as_not_found() {
        assert!(QkartError::NotFound.is_not_found());
        assert!(!QkartError::Http { status: 400 }.is_not_found());
    }
}
