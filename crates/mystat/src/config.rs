//! Client configuration.
//!
//! [`ClientConfig`] carries everything about how a client talks to the portal
//! except who it logs in as. All fields have working defaults, so
//! `ClientConfig::default()` targets the production service.
//!
//! The config also deserializes from JSON (missing fields take defaults), for
//! callers that keep it in a settings file of their own.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::http::wire::APPLICATION_KEY;
use crate::types::ApiUrl;

/// Default per-request deadline in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default locale sent in the `x-language` header.
const DEFAULT_LANGUAGE: &str = "en";

/// `code` value that marks an application-level failure in a JSON reply.
const DEFAULT_FAILURE_CODE: i64 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Versioned API root all paths are relative to.
    pub base_url: ApiUrl,
    /// Locale for localized fields in replies.
    pub language: String,
    /// Default deadline for each network call.
    pub timeout_ms: u64,
    /// Application identifier sent with the login call.
    pub application_key: String,
    /// JSON `code` value treated as failure; `None` ignores the field entirely.
    pub failure_code: Option<i64>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: ApiUrl::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            application_key: APPLICATION_KEY.to_string(),
            failure_code: Some(DEFAULT_FAILURE_CODE),
            user_agent: concat!("mystat/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: ApiUrl) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_application_key(mut self, key: impl Into<String>) -> Self {
        self.application_key = key.into();
        self
    }

    pub fn with_failure_code(mut self, code: Option<i64>) -> Self {
        self.failure_code = code;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Default deadline for each network call.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
