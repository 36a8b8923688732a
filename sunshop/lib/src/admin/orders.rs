use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::client::ApiClient;
use crate::endpoint::ListQuery;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::routes::admin as routes;

/// Order management.
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

    /// Moves an order to `status` (for example `shipped`) with a JSON `PATCH`.
    pub async fn update_status<T: DeserializeOwned>(
        &self,
        id: impl Display,
        status: &str,
    ) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .send_json(
                RestMethod::Patch,
                routes::ORDER_STATUS,
                &[("id", id.as_str())],
                json!({ "status": status }),
            )
            .await
    }
}
