use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::routes::customer as routes;

#[derive(Debug, Clone, Copy)]
pub struct Checkout<'a> {
    api: &'a ApiClient,
}

impl<'a> Checkout<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Places an order from the current cart. `order` carries shipping
    /// address, payment method and an optional coupon code.
    pub async fn place_order<T: DeserializeOwned>(&self, order: Value) -> Result<T, ApiError> {
        self.api
            .send_json(RestMethod::Post, routes::CHECKOUT, &[], order)
            .await
    }
}
