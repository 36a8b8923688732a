//! Authenticated REST client for the SunShop solar-equipment store.
//!
//! This library is the request layer shared by the admin dashboard and the
//! storefront: it builds URLs against a configured base, attaches the bearer
//! token held in a pluggable session store, encodes JSON or multipart bodies
//! and exposes one call group per backend resource.
//!
//! ## Core Types
//!
//! - [`ApiClient`] - single request path with tracing instrumentation
//! - [`ApiClientBuilder`] - timeout, default headers, update strategy, store
//! - [`AdminClient`] - admin call groups (catalog, orders, staff, ...)
//! - [`CustomerClient`] - storefront call groups (cart, checkout, ...)
//!
//! ## Session Storage
//!
//! - [`SessionStore`] - trait for token persistence backends
//! - [`MemoryStore`] - process-local store
//! - [`JsonFileStore`] - JSON file with advisory locking
//!
//! ## Requests
//!
//! - [`EndpointMap`] and [`routes`] - path templates joined onto the base URL
//! - [`ListQuery`] - paging, search and filter parameters
//! - [`RequestBody`], [`FormPayload`], [`FileUpload`] - request bodies
//!
//! ## Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sunshop_lib::{ApiClient, ClientConfig, JsonFileStore, ListQuery};
//!
//! let config = ClientConfig::from_env()?;
//! let customer = ApiClient::from_config(&config)
//!     .store(Arc::new(JsonFileStore::default_path()?))
//!     .customer()?;
//!
//! let products: serde_json::Value = customer
//!     .products()
//!     .list(&ListQuery::new().search("inverter"))
//!     .await?;
//! customer.cart().add::<serde_json::Value>(42, 2).await?;
//! ```

pub mod admin;
pub mod body;
mod client;
pub mod config;
pub mod customer;
pub mod endpoint;
pub mod error;
mod method;
pub mod routes;
pub mod session;
pub mod types;

pub use admin::AdminClient;
pub use body::{FileUpload, FormPayload, FormValue, RequestBody};
pub use client::{ApiClient, ApiClientBuilder, Role};
pub use config::{ClientConfig, UpdateStrategy};
pub use customer::CustomerClient;
pub use endpoint::{EndpointMap, ListQuery, Route};
pub use error::{ApiError, AuthError, ClientError, ConfigError, SessionError, ValidationError};
pub use method::RestMethod;
pub use session::{JsonFileStore, MemoryStore, SessionStore, StorageKey};
pub use types::{BrandForm, CategoryForm, LoginResponse, ProductForm, TransactionPage};
