//! HTTP transport for portal requests.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::auth::AccessToken;
use crate::error::{Error, InvalidInputError, TransportError};
use crate::types::ApiUrl;

use super::request::{Method, RequestBody, RequestSpec};
use super::wire::{LANGUAGE_HEADER, LOGIN, LoginRequest};

/// A response whose body has been read and, if possible, parsed as JSON.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: Result<Value, String>,
}

impl RawResponse {
    /// The parsed body, or a decode error describing why it isn't JSON.
    pub fn json(self) -> Result<Value, Error> {
        self.body.map_err(Error::decode)
    }

    /// Reason phrase for the status, used when the body carries no message.
    pub fn reason(&self) -> String {
        self.status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string()
    }
}

/// HTTP client bound to one API root.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl HttpClient {
    /// Create a client for `api` with a default per-request deadline.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `user_agent` is not a valid header value.
    pub fn new(api: ApiUrl, timeout: Duration, user_agent: &str) -> Result<Self, Error> {
        let user_agent = header_value(USER_AGENT.as_str(), user_agent)?;
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Http {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, api })
    }

    /// Send the unauthenticated login call.
    #[instrument(skip(self, body), fields(api = %self.api, username = body.username))]
    pub async fn login(&self, body: &LoginRequest<'_>) -> Result<RawResponse, Error> {
        let url = self.api.endpoint(LOGIN);
        debug!(%url, "login request");

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        Self::read(response).await
    }

    /// Send an authenticated request described by `spec`.
    #[instrument(skip(self, spec, token, language), fields(api = %self.api, path = %spec.path))]
    pub async fn send(
        &self,
        spec: &RequestSpec,
        token: &AccessToken,
        language: &HeaderValue,
    ) -> Result<RawResponse, Error> {
        let url = self.api.endpoint(&spec.path);
        debug!(method = ?spec.method, "authenticated request");

        let mut request = match spec.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        }
        .header(ACCEPT, "application/json")
        .header(LANGUAGE_HEADER, language.clone())
        .bearer_auth(token.as_str());

        request = match &spec.body {
            RequestBody::Empty => request,
            RequestBody::Json(body) => request.json(body),
            RequestBody::Multipart(body) => request.multipart(body.to_form()?),
        };

        if let Some(timeout) = spec.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        Self::read(response).await
    }

    async fn read(response: reqwest::Response) -> Result<RawResponse, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::from(e)))?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Ok(Value::Null)
        } else {
            serde_json::from_slice::<Value>(&bytes).map_err(|e| {
                format!(
                    "response body is not valid JSON ({}): {}",
                    e,
                    snippet(&bytes)
                )
            })
        };

        Ok(RawResponse { status, body })
    }
}

/// Validates a locale value for use as a header.
pub(crate) fn language_header(language: &str) -> Result<HeaderValue, Error> {
    header_value(LANGUAGE_HEADER, language)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|_| {
        InvalidInputError::Header {
            name: name.to_string(),
        }
        .into()
    })
}

const MAX_SNIPPET: usize = 200;

fn snippet(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if text.chars().count() <= MAX_SNIPPET {
        text.into_owned()
    } else {
        let cut: String = text.chars().take(MAX_SNIPPET).collect();
        format!("{}... ({} bytes)", cut, bytes.len())
    }
}
