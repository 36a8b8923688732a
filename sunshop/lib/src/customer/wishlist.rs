use serde::de::DeserializeOwned;
use serde_json::json;

use crate::client::ApiClient;
use crate::endpoint::ListQuery;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::routes::customer as routes;

/// Saved products.
#[derive(Debug, Clone, Copy)]
pub struct Wishlist<'a> {
    api: &'a ApiClient,
}

impl<'a> Wishlist<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Lists saved products. Failures are returned, not replaced by an
    /// empty list.
    pub async fn list<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.api.get(routes::WISHLIST, &[], &ListQuery::new()).await
    }

    pub async fn add<T: DeserializeOwned>(&self, product_id: u64) -> Result<T, ApiError> {
        self.api
            .send_json(
                RestMethod::Post,
                routes::WISHLIST,
                &[],
                json!({ "product_id": product_id }),
            )
            .await
    }

    /// Removes a product from the wishlist. Keyed by product, not by
    /// wishlist entry.
    pub async fn remove<T: DeserializeOwned>(&self, product_id: u64) -> Result<T, ApiError> {
        let id = product_id.to_string();
        self.api
            .delete(routes::WISHLIST_ITEM, &[("id", id.as_str())])
            .await
    }
}
