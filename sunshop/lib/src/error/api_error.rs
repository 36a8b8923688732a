//! Top-level API error type.

use super::{AuthError, ClientError, ConfigError, SessionError, ValidationError};
use thiserror::Error;

/// Top-level error type for every SunShop API call.
///
/// Most failures collapse into [`ClientError::HttpStatus`] carrying the
/// backend's message. [`ApiError::ServerError`] is only produced by the
/// storefront cart `add` call, which reports a 500 separately so the UI can
/// tell a broken cart apart from a rejected item.
///
/// ## Examples
///
/// ```rust,ignore
/// use sunshop_lib::ApiError;
///
/// fn describe(err: &ApiError) -> String {
///     match err {
///         ApiError::Auth(e) => format!("please sign in: {e}"),
///         ApiError::ServerError { message } => format!("cart unavailable: {message}"),
///         other => other.to_string(),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport errors and non-success HTTP statuses.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Credentials missing before the request could be attempted.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Base URL, route template or environment configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Response bodies that could not be decoded.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Session store failures.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The backend answered with HTTP 500 on a call that reports it separately.
    #[error("Server error: {message}")]
    ServerError {
        /// Message extracted from the response body.
        message: String,
    },
}

impl ApiError {
    /// Returns the HTTP status code when the backend answered with one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            Self::ServerError { .. } => Some(500),
            _ => None,
        }
    }

    /// Returns `true` if no session token was available for the call.
    pub fn is_missing_token(&self) -> bool {
        matches!(self, Self::Auth(AuthError::MissingToken { .. }))
    }
}
