//! Request execution with tracing instrumentation.
//!
//! This module provides [`ApiClient`], which sends one request per call with
//! the session's bearer token attached, and [`ApiClientBuilder`] for
//! configuring it.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument, warn, Span};
use url::Url;

use super::Role;
use crate::admin::AdminClient;
use crate::body::{FormPayload, RequestBody, METHOD_OVERRIDE_FIELD};
use crate::config::{ClientConfig, UpdateStrategy};
use crate::customer::CustomerClient;
use crate::endpoint::{EndpointMap, ListQuery, Route};
use crate::error::{ApiError, ClientError, ValidationError};
use crate::method::RestMethod;
use crate::session::{MemoryStore, SessionStore};
use crate::types::LoginResponse;

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    default_headers: HeaderMap,
    update_strategy: UpdateStrategy,
    store: Option<Arc<dyn SessionStore>>,
}

impl ApiClientBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
            default_headers: HeaderMap::new(),
            update_strategy: UpdateStrategy::default(),
            store: None,
        }
    }

    /// Sets an explicit request timeout. Requests are unbounded by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let client = ApiClient::builder(base_url)
    ///     .default_header("Accept-Language", "en")?
    ///     .admin()?;
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ClientError::InvalidHeader(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ClientError::InvalidHeader(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Chooses how multipart updates are sent.
    pub fn update_strategy(mut self, strategy: UpdateStrategy) -> Self {
        self.update_strategy = strategy;
        self
    }

    /// Sets the session store. Defaults to a fresh [`MemoryStore`].
    pub fn store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds a client acting for `role`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self, role: Role) -> Result<ApiClient, ApiError> {
        let mut http = reqwest::Client::builder()
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().map_err(ClientError::Request)?;

        let store: Arc<dyn SessionStore> = match self.store {
            Some(store) => store,
            None => Arc::new(MemoryStore::new()),
        };

        Ok(ApiClient {
            http,
            endpoints: EndpointMap::new(self.base_url),
            role,
            store,
            update_strategy: self.update_strategy,
        })
    }

    /// Builds the admin dashboard client.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn admin(self) -> Result<AdminClient, ApiError> {
        self.build(Role::Admin).map(AdminClient::from_api)
    }

    /// Builds the storefront customer client.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn customer(self) -> Result<CustomerClient, ApiError> {
        self.build(Role::Customer).map(CustomerClient::from_api)
    }
}

/// Async HTTP client for the SunShop API.
///
/// Every request reads the role's token from the session store at the time
/// it is built: with a token the request carries `Authorization: Bearer
/// <token>`, without one it is sent anyway and the backend decides. There is
/// no retry, no queueing and no token refresh.
///
/// Clones share the connection pool and the session store.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoints: EndpointMap,
    role: Role,
    store: Arc<dyn SessionStore>,
    update_strategy: UpdateStrategy,
}

impl ApiClient {
    /// Creates a new builder rooted at `base_url`.
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Creates a builder preloaded from `config`.
    pub fn from_config(config: &ClientConfig) -> ApiClientBuilder {
        let builder = ApiClientBuilder::new(config.base_url.clone())
            .update_strategy(config.update_strategy);
        match config.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    /// Returns the role this client acts for.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the endpoint map.
    pub fn endpoints(&self) -> &EndpointMap {
        &self.endpoints
    }

    /// Returns the session store.
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Returns the multipart update strategy.
    pub fn update_strategy(&self) -> UpdateStrategy {
        self.update_strategy
    }

    /// Reads the role's bearer token from the session store.
    ///
    /// ## Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(self
            .store
            .get(self.role.token_key())?
            .filter(|token| !token.is_empty()))
    }

    /// Returns `true` if a token is currently stored for this role.
    ///
    /// ## Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub fn is_authenticated(&self) -> Result<bool, ApiError> {
        Ok(self.token()?.is_some())
    }

    /// Reads the cached user record, if the role keeps one.
    ///
    /// ## Errors
    ///
    /// Returns an error if the store cannot be read or the record is not JSON.
    pub fn cached_user(&self) -> Result<Option<Value>, ApiError> {
        let Some(key) = self.role.user_key() else {
            return Ok(None);
        };
        match self.store.get(key)? {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|source| {
                ValidationError::CachedRecord {
                    key: key.as_str(),
                    source,
                }
                .into()
            }),
            None => Ok(None),
        }
    }

    /// Removes the role's token and cached user. Never touches the network.
    ///
    /// ## Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub fn clear_session(&self) -> Result<(), ApiError> {
        self.store.remove(self.role.token_key())?;
        if let Some(key) = self.role.user_key() {
            self.store.remove(key)?;
        }
        info!(role = %self.role, "session cleared");
        Ok(())
    }

    /// Sends a request and decodes the JSON response.
    ///
    /// JSON bodies are sent with `Content-Type: application/json`. Multipart
    /// bodies leave the content type to the HTTP stack so the boundary is
    /// correct. An empty success body decodes as JSON `null`.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The session store cannot be read
    /// - The request fails (network, TLS, timeout if configured)
    /// - The server returns a non-success status code
    /// - The response body is not valid JSON for `T`
    #[instrument(
        name = "api_request",
        skip_all,
        fields(
            role = %self.role,
            http.method = %method,
            http.url = %url,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn request<T>(
        &self,
        method: RestMethod,
        url: Url,
        body: RequestBody,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut request = self.http.request(method.to_reqwest(), url);

        let token = self.token()?;
        debug!(authenticated = token.is_some(), "sending request");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart(form) => request.multipart(form.into_form()?),
        };

        let response = request.send().await.map_err(ClientError::Request)?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        let bytes = response.bytes().await.map_err(ClientError::Request)?;

        if !status.is_success() {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            let message = error_message(&bytes, status_code);
            warn!(status = status_code, %message, "request failed");
            return Err(ClientError::HttpStatus {
                status: status_code,
                message,
            }
            .into());
        }

        Span::current().record("otel.status_code", "OK");
        Ok(decode_json(&bytes)?)
    }

    /// `GET` a route with an optional query string.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        route: Route,
        params: &[(&str, &str)],
        query: &ListQuery,
    ) -> Result<T, ApiError> {
        let url = self.endpoints.url_with_query(route, params, query)?;
        self.request(RestMethod::Get, url, RequestBody::Empty).await
    }

    /// Sends a JSON body with `method`.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: RestMethod,
        route: Route,
        params: &[(&str, &str)],
        body: Value,
    ) -> Result<T, ApiError> {
        let url = self.endpoints.url(route, params)?;
        self.request(method, url, RequestBody::Json(body)).await
    }

    /// `POST`s a multipart form.
    pub(crate) async fn send_form<T: DeserializeOwned>(
        &self,
        route: Route,
        params: &[(&str, &str)],
        form: FormPayload,
    ) -> Result<T, ApiError> {
        let url = self.endpoints.url(route, params)?;
        self.request(RestMethod::Post, url, RequestBody::Multipart(form))
            .await
    }

    /// Sends a multipart form that updates a resource with `verb`.
    ///
    /// Under [`UpdateStrategy::MethodOverride`] this is a `POST` whose form
    /// ends with `_method=<verb>`; under [`UpdateStrategy::NativeVerbs`] the
    /// verb is used directly.
    pub(crate) async fn send_form_update<T: DeserializeOwned>(
        &self,
        verb: RestMethod,
        route: Route,
        params: &[(&str, &str)],
        mut form: FormPayload,
    ) -> Result<T, ApiError> {
        debug_assert!(verb.is_update(), "{verb} is not an update verb");
        let url = self.endpoints.url(route, params)?;
        match self.update_strategy {
            UpdateStrategy::MethodOverride => {
                form.push_text(METHOD_OVERRIDE_FIELD, verb.to_string());
                self.request(RestMethod::Post, url, RequestBody::Multipart(form))
                    .await
            }
            UpdateStrategy::NativeVerbs => {
                self.request(verb, url, RequestBody::Multipart(form)).await
            }
        }
    }

    /// `DELETE`s a route.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        route: Route,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoints.url(route, params)?;
        self.request(RestMethod::Delete, url, RequestBody::Empty)
            .await
    }

    /// `POST`s credentials and persists the session the response carries.
    ///
    /// The token (and, for customers, the user record) is stored before this
    /// returns. A customer login without a `user` drops any previously cached
    /// record. A response without a token stores nothing.
    pub(crate) async fn sign_in(
        &self,
        route: Route,
        body: RequestBody,
    ) -> Result<LoginResponse, ApiError> {
        let url = self.endpoints.url(route, &[])?;
        let login: LoginResponse = self.request(RestMethod::Post, url, body).await?;
        self.persist_login(&login)?;
        Ok(login)
    }

    fn persist_login(&self, login: &LoginResponse) -> Result<(), ApiError> {
        let Some(token) = login.bearer_token() else {
            debug!(
                role = %self.role,
                requires_verification = login.needs_verification(),
                "login response carried no token"
            );
            return Ok(());
        };

        self.store.set(self.role.token_key(), token)?;
        if let Some(key) = self.role.user_key() {
            match login.user.as_ref() {
                Some(user) => {
                    let record =
                        serde_json::to_string(user).map_err(ValidationError::JsonParse)?;
                    self.store.set(key, &record)?;
                }
                None => self.store.remove(key)?,
            }
        }

        info!(role = %self.role, key = %self.role.token_key(), "session token stored");
        Ok(())
    }
}

/// Extracts a human-readable error from a failed response body.
///
/// Looks at `message`, then `error`, then the first entry of `errors` (either
/// a list or a field-to-messages object).
fn error_message(body: &[u8], status: u16) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| message_from(&value))
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

fn message_from(value: &Value) -> Option<String> {
    let text = |v: &Value| v.as_str().filter(|s| !s.is_empty()).map(str::to_string);

    if let Some(message) = value.get("message").and_then(text) {
        return Some(message);
    }
    if let Some(error) = value.get("error").and_then(text) {
        return Some(error);
    }

    let first = match value.get("errors")? {
        Value::Array(items) => items.first()?,
        Value::Object(fields) => fields.values().next()?,
        _ => return None,
    };
    match first {
        Value::Array(messages) => messages.first().and_then(text),
        other => text(other),
    }
}

fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(Value::Null).map_err(ValidationError::JsonParse);
    }
    serde_json::from_slice(body).map_err(ValidationError::JsonParse)
}
