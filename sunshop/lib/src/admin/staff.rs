use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoint::ListQuery;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::routes::admin as routes;

/// Staff accounts.
#[derive(Debug, Clone, Copy)]
pub struct Staff<'a> {
    api: &'a ApiClient,
}

impl<'a> Staff<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list<T: DeserializeOwned>(&self, query: &ListQuery) -> Result<T, ApiError> {
        self.api.get(routes::STAFF, &[], query).await
    }

    pub async fn get<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .get(routes::STAFF_MEMBER, &[("id", id.as_str())], &ListQuery::new())
            .await
    }

    pub async fn create<T: DeserializeOwned>(&self, member: Value) -> Result<T, ApiError> {
        self.api
            .send_json(RestMethod::Post, routes::STAFF, &[], member)
            .await
    }

    pub async fn update<T: DeserializeOwned>(
        &self,
        id: impl Display,
        member: Value,
    ) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .send_json(RestMethod::Put, routes::STAFF_MEMBER, &[("id", id.as_str())], member)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .delete(routes::STAFF_MEMBER, &[("id", id.as_str())])
            .await
    }
}
