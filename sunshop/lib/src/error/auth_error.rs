//! Authentication precondition errors.

use thiserror::Error;

use crate::session::StorageKey;

/// Errors raised before a request is sent because credentials are missing.
///
/// The backend's own 401/403 answers are not mapped here; they arrive as
/// [`ClientError::HttpStatus`](super::ClientError::HttpStatus) with the
/// backend's message.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No session token is stored under the role's token key.
    #[error("No session token stored under {key}; sign in first")]
    MissingToken {
        /// The storage key that was consulted.
        key: StorageKey,
    },
}
