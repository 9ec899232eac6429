//! Authenticated request execution.
//!
//! [`RequestExecutor`] owns the client's only mutable shared state: the
//! current [`Session`] and the slot holding an in-flight login. Every request,
//! read or write, goes through the same loop:
//!
//! 1. obtain a valid session, logging in if it is missing or expired;
//! 2. send the request with the bearer token and locale header;
//! 3. on HTTP 401, drop the session and go round once more;
//! 4. otherwise turn the reply into `Ok(json)` or a typed error.
//!
//! Concurrent callers that find the session unusable share a single login
//! call instead of each starting their own.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use reqwest::StatusCode;
use reqwest::header::HeaderValue;
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

use crate::auth::{Authenticator, Credentials, Session};
use crate::error::Error;
use crate::http::wire::{application_failure, error_message};
use crate::http::{HttpClient, RawResponse, RequestSpec};

/// How many times one call may re-authenticate after a 401.
const AUTH_RETRY_BUDGET: u32 = 1;

type PendingLogin = Shared<BoxFuture<'static, Result<Session, Error>>>;

/// What a reply means for the retry loop.
enum Outcome {
    /// HTTP 401: the token was refused.
    Unauthorized(String),
    /// Anything else is final for this call.
    Done(Result<Value, Error>),
}

/// Executes requests on behalf of one client instance.
pub(crate) struct RequestExecutor {
    http: HttpClient,
    authenticator: Authenticator,
    credentials: RwLock<Credentials>,
    language: RwLock<HeaderValue>,
    failure_code: Option<i64>,
    session: Arc<RwLock<Option<Session>>>,
    /// Locked before `session` and `credentials` wherever both are taken.
    pending: Arc<Mutex<Option<(u64, PendingLogin)>>>,
    login_seq: AtomicU64,
}

impl RequestExecutor {
    pub fn new(
        http: HttpClient,
        authenticator: Authenticator,
        credentials: Credentials,
        language: HeaderValue,
        failure_code: Option<i64>,
        session: Option<Session>,
    ) -> Self {
        Self {
            http,
            authenticator,
            credentials: RwLock::new(credentials),
            language: RwLock::new(language),
            failure_code,
            session: Arc::new(RwLock::new(session)),
            pending: Arc::new(Mutex::new(None)),
            login_seq: AtomicU64::new(0),
        }
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Perform one logical request, re-authenticating at most once on 401.
    #[instrument(skip(self, spec), fields(method = ?spec.method(), path = %spec.path()))]
    pub async fn execute(&self, spec: &RequestSpec) -> Result<Value, Error> {
        let mut retries_left = AUTH_RETRY_BUDGET;

        loop {
            let session = self.session().await?;
            let language = self.language.read().await.clone();
            let response = self.http.send(spec, session.token(), &language).await?;

            match self.classify(response) {
                Outcome::Done(result) => return result,
                Outcome::Unauthorized(message) if retries_left == 0 => {
                    warn!("Authorization refused after re-authentication");
                    return Err(Error::unauthenticated(message));
                }
                Outcome::Unauthorized(_) => {
                    retries_left -= 1;
                    warn!("Authorization refused, re-authenticating");
                    self.invalidate_if_current(&session).await;
                }
            }
        }
    }

    /// Returns a usable session, logging in if there is none.
    pub async fn session(&self) -> Result<Session, Error> {
        if let Some(session) = self.valid_session().await {
            return Ok(session);
        }

        let pending = {
            let mut slot = self.pending.lock().await;

            // Another caller may have finished a login while we waited.
            if let Some(session) = self.valid_session().await {
                return Ok(session);
            }

            match slot.as_ref() {
                Some((_, pending)) => {
                    debug!("Joining login already in flight");
                    pending.clone()
                }
                None => {
                    let id = self.login_seq.fetch_add(1, Ordering::Relaxed);
                    let pending = self.start_login(id).await;
                    *slot = Some((id, pending.clone()));
                    pending
                }
            }
        };

        pending.await
    }

    /// Drop the current session and log in again. A login already in flight
    /// is abandoned: its waiters still get its result, but it is not installed.
    pub async fn relogin(&self) -> Result<Session, Error> {
        self.reset(None).await;
        self.session().await
    }

    /// Forget the current session; the next request logs in again.
    pub async fn invalidate(&self) {
        *self.session.write().await = None;
    }

    /// Returns the current session, valid or not.
    pub async fn current(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Replace the credentials used for future logins and drop the session.
    /// A login started under the previous credentials is never installed.
    pub async fn set_credentials(&self, credentials: Credentials) {
        self.reset(Some(credentials)).await;
    }

    /// Start a new login generation: clear the in-flight slot and the session,
    /// optionally swapping credentials, all under the slot lock.
    async fn reset(&self, credentials: Option<Credentials>) {
        let mut slot = self.pending.lock().await;
        if let Some((id, _)) = slot.take() {
            debug!(login = id, "Abandoning login in flight");
        }
        if let Some(credentials) = credentials {
            *self.credentials.write().await = credentials;
        }
        *self.session.write().await = None;
    }

    pub async fn set_language(&self, language: HeaderValue) {
        *self.language.write().await = language;
    }

    pub async fn language(&self) -> HeaderValue {
        self.language.read().await.clone()
    }

    async fn valid_session(&self) -> Option<Session> {
        let now = Utc::now();
        self.session
            .read()
            .await
            .as_ref()
            .filter(|s| !s.is_expired(now))
            .cloned()
    }

    /// Only drops the session if it is still the one that was refused, so a
    /// late 401 cannot discard a token another caller just obtained.
    async fn invalidate_if_current(&self, refused: &Session) {
        let mut slot = self.session.write().await;
        if slot.as_ref().is_some_and(|s| s.same_issue(refused)) {
            *slot = None;
        }
    }

    /// Build the shared login future. While it still owns the in-flight slot
    /// it installs the new session and clears the slot itself, so the outcome
    /// is published exactly once regardless of which waiter drives it. Once
    /// abandoned by [`Self::reset`] it only hands its result to its waiters.
    async fn start_login(&self, id: u64) -> PendingLogin {
        let authenticator = self.authenticator.clone();
        let credentials = self.credentials.read().await.clone();
        let session = Arc::clone(&self.session);
        let pending = Arc::clone(&self.pending);

        info!(login = id, "Starting login");

        async move {
            let result = authenticator
                .authenticate(&credentials)
                .await
                .map(|outcome| outcome.session);

            let mut slot = pending.lock().await;
            if slot.as_ref().is_some_and(|(current, _)| *current == id) {
                if let Ok(new_session) = &result {
                    *session.write().await = Some(new_session.clone());
                }
                *slot = None;
            } else {
                debug!(login = id, "Login finished after being abandoned");
            }
            drop(slot);

            result
        }
        .boxed()
        .shared()
    }

    /// Decide what a reply means. Precedence: HTTP 401, then the
    /// application failure envelope, then other HTTP errors, then decoding.
    fn classify(&self, response: RawResponse) -> Outcome {
        let status = response.status;
        let message = response
            .body
            .as_ref()
            .ok()
            .and_then(error_message)
            .unwrap_or_else(|| response.reason());

        if status == StatusCode::UNAUTHORIZED {
            return Outcome::Unauthorized(message);
        }

        if let Ok(body) = &response.body
            && let Some(failure) = self.failure_code.and_then(|c| application_failure(body, c))
        {
            return Outcome::Done(Err(Error::Upstream {
                status: (!status.is_success()).then(|| status.as_u16()),
                code: Some(failure.code),
                message: failure.message,
            }));
        }

        if !status.is_success() {
            return Outcome::Done(Err(Error::Upstream {
                status: Some(status.as_u16()),
                code: None,
                message,
            }));
        }

        Outcome::Done(response.json())
    }
}
