use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::body::RequestBody;
use crate::client::ApiClient;
use crate::endpoint::ListQuery;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::routes::customer as routes;

/// The signed-in customer's orders.
#[derive(Debug, Clone, Copy)]
pub struct Orders<'a> {
    api: &'a ApiClient,
}

impl<'a> Orders<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list<T: DeserializeOwned>(&self, query: &ListQuery) -> Result<T, ApiError> {
        self.api.get(routes::ORDERS, &[], query).await
    }

    pub async fn get<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .get(routes::ORDER, &[("id", id.as_str())], &ListQuery::new())
            .await
    }

    /// Asks the backend to cancel an order. Sent as a bodiless `POST`.
    pub async fn cancel<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        let id = id.to_string();
        let url = self
            .api
            .endpoints()
            .url(routes::ORDER_CANCEL, &[("id", id.as_str())])?;
        self.api
            .request(RestMethod::Post, url, RequestBody::Empty)
            .await
    }
}
