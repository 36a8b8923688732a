use serde::de::DeserializeOwned;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::routes::customer as routes;

#[derive(Debug, Clone, Copy)]
pub struct Coupons<'a> {
    api: &'a ApiClient,
}

impl<'a> Coupons<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Checks a coupon code against a cart subtotal and returns the discount
    /// the backend would grant.
    pub async fn apply<T: DeserializeOwned>(&self, code: &str, subtotal: f64) -> Result<T, ApiError> {
        self.api
            .send_json(
                RestMethod::Post,
                routes::COUPON_APPLY,
                &[],
                json!({ "code": code, "subtotal": subtotal }),
            )
            .await
    }
}
