use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::client::ApiClient;
use crate::endpoint::ListQuery;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::routes::admin as routes;

/// Stock levels.
#[derive(Debug, Clone, Copy)]
pub struct Inventory<'a> {
    api: &'a ApiClient,
}

impl<'a> Inventory<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list<T: DeserializeOwned>(&self, query: &ListQuery) -> Result<T, ApiError> {
        self.api.get(routes::INVENTORY, &[], query).await
    }

    /// Adds `quantity_delta` (negative to remove) to a product's stock.
    pub async fn adjust<T: DeserializeOwned>(
        &self,
        product_id: impl Display,
        quantity_delta: i64,
        reason: &str,
    ) -> Result<T, ApiError> {
        let id = product_id.to_string();
        let body = json!({ "quantity": quantity_delta, "reason": reason });
        self.api
            .send_json(RestMethod::Patch, routes::INVENTORY_ITEM, &[("id", id.as_str())], body)
            .await
    }

    /// Products whose stock is at or below `threshold`.
    pub async fn low_stock<T: DeserializeOwned>(&self, threshold: u32) -> Result<T, ApiError> {
        let query = ListQuery::new().filter("threshold", threshold.to_string());
        self.api
            .get(routes::INVENTORY_LOW_STOCK, &[], &query)
            .await
    }
}
