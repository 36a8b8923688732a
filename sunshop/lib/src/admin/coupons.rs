use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoint::ListQuery;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::routes::admin as routes;

/// Discount coupons.
#[derive(Debug, Clone, Copy)]
pub struct Coupons<'a> {
    api: &'a ApiClient,
}

impl<'a> Coupons<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list<T: DeserializeOwned>(&self, query: &ListQuery) -> Result<T, ApiError> {
        self.api.get(routes::COUPONS, &[], query).await
    }

    pub async fn create<T: DeserializeOwned>(&self, coupon: Value) -> Result<T, ApiError> {
        self.api
            .send_json(RestMethod::Post, routes::COUPONS, &[], coupon)
            .await
    }

    pub async fn update<T: DeserializeOwned>(
        &self,
        id: impl Display,
        coupon: Value,
    ) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .send_json(RestMethod::Put, routes::COUPON, &[("id", id.as_str())], coupon)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api.delete(routes::COUPON, &[("id", id.as_str())]).await
    }
}
