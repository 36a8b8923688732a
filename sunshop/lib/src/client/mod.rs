//! Authenticated HTTP client.
//!
//! [`ApiClient`] is the single request path for every call group: it reads
//! the bearer token from the session store, encodes the body, sends one
//! request and decodes the JSON answer.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sunshop_lib::{ApiClient, JsonFileStore, ListQuery};
//! use url::Url;
//!
//! let store = Arc::new(JsonFileStore::default_path()?);
//! let admin = ApiClient::builder(Url::parse("https://api.sunshop.store")?)
//!     .store(store)
//!     .admin()?;
//!
//! admin.auth().login("ops@sunshop.store", "secret").await?;
//! let orders: serde_json::Value = admin.orders().list(&ListQuery::new().status("pending")).await?;
//! ```

mod executor;
mod role;

pub use executor::{ApiClient, ApiClientBuilder};
pub use role::Role;
