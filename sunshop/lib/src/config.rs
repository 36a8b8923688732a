//! Client configuration read from the environment.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Production API host used when `SUNSHOP_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.sunshop.store";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "SUNSHOP_API_URL";

/// Environment variable setting an explicit request timeout in seconds.
pub const TIMEOUT_ENV: &str = "SUNSHOP_TIMEOUT_SECS";

/// Environment variable switching multipart updates to native verbs.
pub const NATIVE_VERBS_ENV: &str = "SUNSHOP_NATIVE_VERBS";

/// Environment variable overriding the session file location.
pub const SESSION_FILE_ENV: &str = "SUNSHOP_SESSION_FILE";

/// How update operations on multipart-only resources are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateStrategy {
    /// Send `POST` and append a `_method` field naming the intended verb.
    ///
    /// Needed for backends that only parse multipart bodies on `POST`.
    #[default]
    MethodOverride,
    /// Send the real `PUT`/`PATCH` verb with the multipart body.
    NativeVerbs,
}

/// Settings shared by the admin and customer clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint is resolved against.
    pub base_url: Url,
    /// Explicit request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// Multipart update behaviour.
    pub update_strategy: UpdateStrategy,
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with default settings.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
            update_strategy: UpdateStrategy::default(),
        }
    }

    /// Reads the configuration from process environment variables.
    ///
    /// ## Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// ## Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = match lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Url::parse(raw.trim())?,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let timeout = match lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: TIMEOUT_ENV,
                    value: raw.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let update_strategy = match lookup(NATIVE_VERBS_ENV) {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => UpdateStrategy::NativeVerbs,
                "" | "0" | "false" | "no" => UpdateStrategy::MethodOverride,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: NATIVE_VERBS_ENV,
                        value: raw,
                    });
                }
            },
            None => UpdateStrategy::default(),
        };

        Ok(Self {
            base_url,
            timeout,
            update_strategy,
        })
    }
}
