//! Catalog management: categories, products and brands.
//!
//! These resources accept images, so creates and updates are always sent as
//! multipart forms. Updates go through the client's [`UpdateStrategy`].
//!
//! [`UpdateStrategy`]: crate::config::UpdateStrategy

use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::body::{FileUpload, FormPayload};
use crate::client::ApiClient;
use crate::endpoint::ListQuery;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::routes::admin as routes;
use crate::types::{BrandForm, CategoryForm, ProductForm};

/// Product categories.
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

    pub async fn get<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .get(routes::CATEGORY, &[("id", id.as_str())], &ListQuery::new())
            .await
    }

    /// Creates a category from a multipart form.
    pub async fn create<T: DeserializeOwned>(&self, form: CategoryForm) -> Result<T, ApiError> {
        self.api.send_form(routes::CATEGORIES, &[], form.into()).await
    }

    /// Replaces a category.
    pub async fn update<T: DeserializeOwned>(
        &self,
        id: impl Display,
        form: CategoryForm,
    ) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .send_form_update(RestMethod::Put, routes::CATEGORY, &[("id", id.as_str())], form.into())
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api.delete(routes::CATEGORY, &[("id", id.as_str())]).await
    }
}

/// Products.
#[derive(Debug, Clone, Copy)]
pub struct Products<'a> {
    api: &'a ApiClient,
}

impl<'a> Products<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Lists products. Supports `search`, `status` and filters such as
    /// `category_id` or `brand_id`.
    pub async fn list<T: DeserializeOwned>(&self, query: &ListQuery) -> Result<T, ApiError> {
        self.api.get(routes::PRODUCTS, &[], query).await
    }

    pub async fn get<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .get(routes::PRODUCT, &[("id", id.as_str())], &ListQuery::new())
            .await
    }

    pub async fn create<T: DeserializeOwned>(&self, form: ProductForm) -> Result<T, ApiError> {
        self.api.send_form(routes::PRODUCTS, &[], form.into()).await
    }

    pub async fn update<T: DeserializeOwned>(
        &self,
        id: impl Display,
        form: ProductForm,
    ) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .send_form_update(RestMethod::Put, routes::PRODUCT, &[("id", id.as_str())], form.into())
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api.delete(routes::PRODUCT, &[("id", id.as_str())]).await
    }

    /// Uploads a spreadsheet for bulk import. The file goes in the `file`
    /// field.
    pub async fn import<T: DeserializeOwned>(&self, file: FileUpload) -> Result<T, ApiError> {
        let form = FormPayload::new().file("file", file);
        self.api.send_form(routes::PRODUCT_IMPORT, &[], form).await
    }
}

/// Brands.
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

    pub async fn create<T: DeserializeOwned>(&self, form: BrandForm) -> Result<T, ApiError> {
        self.api.send_form(routes::BRANDS, &[], form.into()).await
    }

    pub async fn update<T: DeserializeOwned>(
        &self,
        id: impl Display,
        form: BrandForm,
    ) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .send_form_update(RestMethod::Put, routes::BRAND, &[("id", id.as_str())], form.into())
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api.delete(routes::BRAND, &[("id", id.as_str())]).await
    }
}
