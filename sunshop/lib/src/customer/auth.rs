use serde_json::{json, Value};

use crate::body::{FormPayload, RequestBody};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::routes::customer as routes;
use crate::types::LoginResponse;

/// Customer registration, sign-in and session calls.
///
/// Successful sign-ins store both the token (`customerToken`) and the
/// returned user record (`customerUser`).
#[derive(Debug, Clone, Copy)]
pub struct CustomerAuth<'a> {
    api: &'a ApiClient,
}

impl<'a> CustomerAuth<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Creates an account.
    ///
    /// Backends that sign the new customer in straight away return a token,
    /// which is stored like a login. Backends that send an OTP first return
    /// `requires_verification` and nothing is stored.
    pub async fn register(&self, account: Value) -> Result<LoginResponse, ApiError> {
        self.api
            .sign_in(routes::REGISTER, RequestBody::Json(account))
            .await
    }

    /// Signs in with email and password, sent as a multipart form.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let form = FormPayload::new()
            .text("email", email)
            .text("password", password);
        self.api
            .sign_in(routes::LOGIN, RequestBody::Multipart(form))
            .await
    }

    /// Completes an OTP sign-in.
    pub async fn verify(
        &self,
        user_id: impl Into<Value>,
        code: &str,
    ) -> Result<LoginResponse, ApiError> {
        let body = json!({ "user_id": user_id.into(), "otp": code });
        self.api.sign_in(routes::VERIFY, RequestBody::Json(body)).await
    }

    /// Forgets the token and the cached user. No request is sent.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.api.clear_session()
    }

    /// Returns the user record cached at the last sign-in.
    ///
    /// The record is never refreshed from the backend.
    pub fn current_user(&self) -> Result<Option<Value>, ApiError> {
        self.api.cached_user()
    }

    pub fn is_authenticated(&self) -> Result<bool, ApiError> {
        self.api.is_authenticated()
    }
}
