//! The portal client.
//!
//! A [`Client`] couples one set of [`Credentials`] with one session. It is
//! cheap to clone (clones share state through an `Arc`) and safe to use from
//! many tasks at once; concurrent requests that need a fresh token wait on a
//! single login.

mod endpoints;
mod homework;
mod portal;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::auth::{AccessToken, Authenticator, Credentials, LoginOutcome, Session};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::executor::RequestExecutor;
use crate::http::{HttpClient, RequestSpec, language_header};

pub use homework::{HomeworkQuery, HomeworkUpload};

/// Authenticated client for the student portal.
///
/// # Example
///
/// ```no_run
/// use mystat::{Client, ClientConfig, Credentials};
///
/// # async fn example() -> Result<(), mystat::Error> {
/// let client = Client::new(ClientConfig::default(), Credentials::new("student", "password"))?;
///
/// // The first call logs in transparently.
/// let info = client.user_info().await?;
/// println!("{} ({})", info.full_name, info.current_group_id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    executor: RequestExecutor,
    /// Held for the whole lookup so concurrent listings resolve it once.
    group_id: Mutex<Option<i64>>,
}

/// Session state a caller may persist to resume a client without logging in.
///
/// # Security
///
/// The access token grants access to the account. The library never writes
/// this anywhere; where it is kept is up to the caller.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientState {
    pub access_token: String,
    pub token_expires_at: DateTime<Utc>,
    #[serde(default)]
    pub group_id: Option<i64>,
}

impl std::fmt::Debug for ClientState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientState")
            .field("access_token", &"[REDACTED]")
            .field("token_expires_at", &self.token_expires_at)
            .field("group_id", &self.group_id)
            .finish()
    }
}

impl Client {
    /// Create a client. No request is made until the first call.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configured language is not a valid
    /// header value, or `Transport` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig, credentials: Credentials) -> Result<Self, Error> {
        Self::build(config, credentials, None, None)
    }

    /// Create a client that resumes from previously exported state.
    ///
    /// An expired token is accepted; it is simply replaced on first use.
    pub fn restore(
        config: ClientConfig,
        credentials: Credentials,
        state: ClientState,
    ) -> Result<Self, Error> {
        let session = Session::restore(
            AccessToken::new(state.access_token),
            state.token_expires_at,
            Utc::now(),
        );
        Self::build(config, credentials, Some(session), state.group_id)
    }

    fn build(
        config: ClientConfig,
        credentials: Credentials,
        session: Option<Session>,
        group_id: Option<i64>,
    ) -> Result<Self, Error> {
        let language = language_header(&config.language)?;
        let http = HttpClient::new(config.base_url.clone(), config.timeout(), &config.user_agent)?;
        let authenticator = Authenticator::new(
            http.clone(),
            config.application_key.clone(),
            config.failure_code,
        );
        let executor = RequestExecutor::new(
            http,
            authenticator,
            credentials,
            language,
            config.failure_code,
            session,
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                executor,
                group_id: Mutex::new(group_id),
            }),
        })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Log in now, replacing any current session.
    #[instrument(skip(self))]
    pub async fn login(&self) -> Result<Session, Error> {
        self.inner.executor.relogin().await
    }

    /// Run the login exchange for `credentials` without touching this
    /// client's session.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<LoginOutcome, Error> {
        self.inner.executor.authenticator().authenticate(credentials).await
    }

    /// Switch to different credentials. The current session and the cached
    /// group id belong to the previous account and are discarded.
    pub async fn set_credentials(&self, credentials: Credentials) {
        let mut group_id = self.inner.group_id.lock().await;
        self.inner.executor.set_credentials(credentials).await;
        *group_id = None;
    }

    /// Change the locale used for subsequent requests.
    pub async fn set_language(&self, language: &str) -> Result<(), Error> {
        let value = language_header(language)?;
        self.inner.executor.set_language(value).await;
        Ok(())
    }

    /// Returns the locale currently sent with requests.
    pub async fn language(&self) -> String {
        let value = self.inner.executor.language().await;
        value.to_str().unwrap_or_default().to_string()
    }

    /// Forget the current session; the next request logs in again.
    pub async fn invalidate_session(&self) {
        self.inner.executor.invalidate().await;
    }

    /// Returns true if a session exists and has not reached its expiry.
    pub async fn is_session_valid(&self) -> bool {
        self.inner
            .executor
            .current()
            .await
            .is_some_and(|s| !s.is_expired(Utc::now()))
    }

    /// Returns the expiry of the current session, if there is one.
    pub async fn session_expires_at(&self) -> Option<DateTime<Utc>> {
        self.inner.executor.current().await.map(|s| s.expires_at())
    }

    /// Export the current token and group id for caller-side persistence.
    pub async fn export_state(&self) -> Option<ClientState> {
        let session = self.inner.executor.current().await?;
        let group_id = *self.inner.group_id.lock().await;
        Some(ClientState {
            access_token: session.token().as_str().to_string(),
            token_expires_at: session.expires_at(),
            group_id,
        })
    }

    /// Execute an arbitrary request and return the parsed JSON payload as is.
    pub async fn execute(&self, spec: RequestSpec) -> Result<Value, Error> {
        self.inner.executor.execute(&spec).await
    }

    /// GET a path relative to the API root and return its JSON payload as is.
    pub async fn get_json(&self, path: &str) -> Result<Value, Error> {
        self.execute(RequestSpec::get(path)).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        decode(self.get_json(path).await?)
    }

    /// Returns the student's current group id, asking the profile endpoint
    /// the first time and remembering the answer for this client's lifetime.
    pub(crate) async fn group_id(&self) -> Result<i64, Error> {
        let mut cached = self.inner.group_id.lock().await;
        if let Some(id) = *cached {
            return Ok(id);
        }

        let info = self.user_info().await?;
        debug!(group_id = info.current_group_id, "Resolved current group");
        *cached = Some(info.current_group_id);
        Ok(info.current_group_id)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.config.base_url)
            .field("session", &"[REDACTED]")
            .finish()
    }
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|e| Error::decode(format!("unexpected payload: {}", e)))
}
