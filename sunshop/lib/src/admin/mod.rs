//! Admin dashboard client.
//!
//! [`AdminClient`] owns an [`ApiClient`] bound to the `adminToken` key and
//! hands out borrowed call groups, one per backend resource:
//!
//! ```rust,ignore
//! let admin = ApiClient::builder(base_url).store(store).admin()?;
//! let orders: serde_json::Value = admin
//!     .orders()
//!     .list(&ListQuery::new().status("pending"))
//!     .await?;
//! ```

mod auth;
mod catalog;
mod coupons;
mod dashboard;
mod inventory;
mod orders;
mod profile;
mod staff;
mod transactions;

pub use auth::AdminAuth;
pub use catalog::{Brands, Categories, Products};
pub use coupons::Coupons;
pub use dashboard::Dashboard;
pub use inventory::Inventory;
pub use orders::Orders;
pub use profile::Profile;
pub use staff::Staff;
pub use transactions::Transactions;

use crate::client::ApiClient;

/// Client for the admin dashboard endpoints.
#[derive(Debug, Clone)]
pub struct AdminClient {
    api: ApiClient,
}

impl AdminClient {
    pub(crate) fn from_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// Returns the underlying request client.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn auth(&self) -> AdminAuth<'_> {
        AdminAuth::new(&self.api)
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories::new(&self.api)
    }

    pub fn products(&self) -> Products<'_> {
        Products::new(&self.api)
    }

    pub fn brands(&self) -> Brands<'_> {
        Brands::new(&self.api)
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders::new(&self.api)
    }

    pub fn profile(&self) -> Profile<'_> {
        Profile::new(&self.api)
    }

    pub fn staff(&self) -> Staff<'_> {
        Staff::new(&self.api)
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(&self.api)
    }

    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard::new(&self.api)
    }

    pub fn inventory(&self) -> Inventory<'_> {
        Inventory::new(&self.api)
    }

    pub fn coupons(&self) -> Coupons<'_> {
        Coupons::new(&self.api)
    }
}
