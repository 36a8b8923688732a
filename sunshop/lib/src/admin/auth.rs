use serde_json::{json, Value};

use crate::body::{FormPayload, RequestBody};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::routes::admin as routes;
use crate::types::LoginResponse;

/// Admin sign-in and session calls.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth<'a> {
    api: &'a ApiClient,
}

impl<'a> AdminAuth<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Signs in with email and password.
    ///
    /// Credentials are sent as a multipart form. If the response carries a
    /// token it is stored under `adminToken` before this returns; if the
    /// backend asks for an OTP instead, nothing is stored and the caller
    /// continues with [`verify`](Self::verify).
    ///
    /// ## Errors
    ///
    /// Returns an error if the request fails, the backend rejects the
    /// credentials, or the token cannot be stored.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let form = FormPayload::new()
            .text("email", email)
            .text("password", password);
        self.api
            .sign_in(routes::LOGIN, RequestBody::Multipart(form))
            .await
    }

    /// Completes an OTP sign-in and stores the returned token.
    ///
    /// ## Errors
    ///
    /// Returns an error if the request fails, the code is rejected, or the
    /// token cannot be stored.
    pub async fn verify(
        &self,
        user_id: impl Into<Value>,
        code: &str,
    ) -> Result<LoginResponse, ApiError> {
        let body = json!({ "user_id": user_id.into(), "otp": code });
        self.api.sign_in(routes::VERIFY, RequestBody::Json(body)).await
    }

    /// Forgets the admin token. No request is sent.
    ///
    /// ## Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.api.clear_session()
    }

    /// Returns `true` if an admin token is stored.
    ///
    /// ## Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub fn is_authenticated(&self) -> Result<bool, ApiError> {
        self.api.is_authenticated()
    }
}
