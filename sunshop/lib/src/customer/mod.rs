//! Storefront customer client.
//!
//! Catalog reads work without signing in; the backend decides what an
//! anonymous request may see. Cart, checkout, orders, profile and wishlist
//! calls send the `customerToken` when one is stored.

mod auth;
mod cart;
mod catalog;
mod checkout;
mod coupons;
mod orders;
mod profile;
mod wishlist;

pub use auth::CustomerAuth;
pub use cart::Cart;
pub use catalog::{Brands, Categories, Products};
pub use checkout::Checkout;
pub use coupons::Coupons;
pub use orders::Orders;
pub use profile::Profile;
pub use wishlist::Wishlist;

use crate::client::ApiClient;

/// Client for the storefront endpoints.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    api: ApiClient,
}

impl CustomerClient {
    pub(crate) fn from_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// Returns the underlying request client.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn auth(&self) -> CustomerAuth<'_> {
        CustomerAuth::new(&self.api)
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

    pub fn cart(&self) -> Cart<'_> {
        Cart::new(&self.api)
    }

    pub fn checkout(&self) -> Checkout<'_> {
        Checkout::new(&self.api)
    }

    pub fn coupons(&self) -> Coupons<'_> {
        Coupons::new(&self.api)
    }

    pub fn wishlist(&self) -> Wishlist<'_> {
        Wishlist::new(&self.api)
    }
}
