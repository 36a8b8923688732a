use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::endpoint::ListQuery;
use crate::error::{ApiError, AuthError, ClientError};
use crate::method::RestMethod;
use crate::routes::customer as routes;

/// Shopping cart.
#[derive(Debug, Clone, Copy)]
pub struct Cart<'a> {
    api: &'a ApiClient,
}

impl<'a> Cart<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.api.get(routes::CART, &[], &ListQuery::new()).await
    }

    /// Adds `quantity` of a product to the cart.
    ///
    /// Unlike other calls this one refuses to run anonymously, and it
    /// reports a backend crash separately from a rejected item.
    ///
    /// ## Errors
    ///
    /// - [`AuthError::MissingToken`] if no customer token is stored; no
    ///   request is sent
    /// - [`ApiError::ServerError`] if the backend answers with HTTP 500
    /// - Any other request failure, unchanged
    pub async fn add<T: DeserializeOwned>(&self, product_id: u64, quantity: u32) -> Result<T, ApiError> {
        if self.api.token()?.is_none() {
            debug!(product_id, "cart add refused without a session");
            return Err(AuthError::MissingToken {
                key: self.api.role().token_key(),
            }
            .into());
        }

        let body = json!({ "product_id": product_id, "quantity": quantity });
        match self
            .api
            .send_json(RestMethod::Post, routes::CART, &[], body)
            .await
        {
            Err(ApiError::Client(ClientError::HttpStatus { status: 500, message })) => {
                Err(ApiError::ServerError { message })
            }
            other => other,
        }
    }

    /// Sets the quantity of a cart line.
    pub async fn update<T: DeserializeOwned>(
        &self,
        item_id: impl Display,
        quantity: u32,
    ) -> Result<T, ApiError> {
        let id = item_id.to_string();
        self.api
            .send_json(
                RestMethod::Put,
                routes::CART_ITEM,
                &[("id", id.as_str())],
                json!({ "quantity": quantity }),
            )
            .await
    }

    pub async fn remove<T: DeserializeOwned>(&self, item_id: impl Display) -> Result<T, ApiError> {
        let id = item_id.to_string();
        self.api.delete(routes::CART_ITEM, &[("id", id.as_str())]).await
    }

    /// Empties the cart.
    pub async fn clear<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.api.delete(routes::CART, &[]).await
    }
}
