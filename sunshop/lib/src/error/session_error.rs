//! Session store errors.

use thiserror::Error;

/// Errors that can occur while reading or writing the session store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Failed to read or write the session file.
    #[error("failed to access session file: {0}")]
    Io(#[from] std::io::Error),

    /// The session file is not a JSON object of strings.
    #[error("failed to parse session file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to acquire a file lock.
    #[error("failed to acquire session lock")]
    Lock,

    /// An in-memory store was poisoned by a panicking writer.
    #[error("session store poisoned")]
    Poisoned,

    /// The default session path needs a home directory.
    #[error("could not determine home directory")]
    NoHomeDir,
}
