use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::body::{FileUpload, FormPayload};
use crate::client::ApiClient;
use crate::endpoint::ListQuery;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::routes::customer as routes;

/// The signed-in customer's profile.
#[derive(Debug, Clone, Copy)]
pub struct Profile<'a> {
    api: &'a ApiClient,
}

impl<'a> Profile<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn get<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.api.get(routes::PROFILE, &[], &ListQuery::new()).await
    }

    /// Replaces profile fields. The cached `customerUser` record is left
    /// as it is.
    pub async fn update<T: DeserializeOwned>(&self, profile: Value) -> Result<T, ApiError> {
        self.api
            .send_json(RestMethod::Put, routes::PROFILE, &[], profile)
            .await
    }

    pub async fn upload_avatar<T: DeserializeOwned>(&self, avatar: FileUpload) -> Result<T, ApiError> {
        let form = FormPayload::new().file("avatar", avatar);
        self.api
            .send_form_update(RestMethod::Put, routes::PROFILE_AVATAR, &[], form)
            .await
    }
}
