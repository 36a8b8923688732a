//! HTTP client and network errors.

use thiserror::Error;

/// Errors from the HTTP client layer.
///
/// No distinction is made between authentication, validation and server
/// failures beyond the status code and the message the backend sent.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Message extracted from the response body, or a generic fallback.
        message: String,
    },

    /// A default header name or value could not be encoded.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl ClientError {
    /// Returns the HTTP status code if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidHeader(_) => None,
        }
    }

    /// Returns `true` for 5xx answers.
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_some_and(|status| status >= 500)
    }

    /// Returns the backend message for status errors.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { message, .. } => Some(message),
            _ => None,
        }
    }
}
