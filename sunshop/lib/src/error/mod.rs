//! Error types for the SunShop client.
//!
//! Errors are layered by where they originate:
//!
//! - [`ClientError`] - transport failures and non-success HTTP statuses
//! - [`AuthError`] - missing credentials detected before a request is sent
//! - [`ConfigError`] - base URL, path template and environment problems
//! - [`ValidationError`] - response bodies that cannot be decoded
//! - [`SessionError`] - session store I/O
//!
//! [`ApiError`] aggregates all of them and is what every call group returns.

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod session_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use session_error::SessionError;
pub use validation_error::ValidationError;
