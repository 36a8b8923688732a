//! Public catalog reads.

use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::client::ApiClient;
use crate::endpoint::ListQuery;
use crate::error::ApiError;
use crate::routes::customer as routes;

#[derive(Debug, Clone, Copy)]
pub struct Categories<'a> {
    api: &'a ApiClient,
}

impl<'a> Categories<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list<T: DeserializeOwned>(&self, query: &ListQuery) -> Result<T, ApiError> {
        self.api.get(routes::CATEGORIES, &[], query).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Products<'a> {
    api: &'a ApiClient,
}

impl<'a> Products<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Lists products. Filters such as `category_id`, `brand_id` or
    /// `min_price` go in [`ListQuery::filter`].
    pub async fn list<T: DeserializeOwned>(&self, query: &ListQuery) -> Result<T, ApiError> {
        self.api.get(routes::PRODUCTS, &[], query).await
    }

    pub async fn get<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .get(routes::PRODUCT, &[("id", id.as_str())], &ListQuery::new())
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Brands<'a> {
    api: &'a ApiClient,
}

impl<'a> Brands<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list<T: DeserializeOwned>(&self, query: &ListQuery) -> Result<T, ApiError> {
        self.api.get(routes::BRANDS, &[], query).await
    }
}
