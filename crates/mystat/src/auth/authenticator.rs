//! Login exchange: credentials in, session out.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use tracing::{debug, info, instrument, warn};

use crate::error::Error;
use crate::http::wire::{
    LoginRequest, LoginResponse, application_failure, error_message, field_errors,
};
use crate::http::{HttpClient, RawResponse};
use crate::models::CityData;

use super::credentials::Credentials;
use super::session::{Session, derive_expiry};
use super::tokens::AccessToken;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The new bearer session.
    pub session: Session,
    /// Account type reported by the portal.
    pub user_type: Option<i64>,
    /// City/branch the account belongs to.
    pub city: Option<CityData>,
}

/// Performs the login call against the portal.
///
/// The authenticator never touches a client's current session; installing
/// the returned [`Session`] is the caller's job.
#[derive(Debug, Clone)]
pub struct Authenticator {
    http: HttpClient,
    application_key: String,
    failure_code: Option<i64>,
}

impl Authenticator {
    pub(crate) fn new(http: HttpClient, application_key: String, failure_code: Option<i64>) -> Self {
        Self {
            http,
            application_key,
            failure_code,
        }
    }

    /// Exchange `credentials` for a new session.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the username or password is empty (no request is sent)
    /// - `Unauthenticated` if the portal rejects the credentials
    /// - `Transport` if the portal could not be reached
    /// - `Decode` if the success response lacks a usable token or lifetime
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<LoginOutcome, Error> {
        credentials.validate()?;
        info!("Logging in");

        let request = LoginRequest {
            application_key: &self.application_key,
            id_city: None,
            username: credentials.username(),
            password: credentials.password(),
        };

        // Taken before the request so the derived expiry errs on the early side.
        let issued_at = Utc::now();
        let response = self.http.login(&request).await?;

        let outcome = self.interpret(response, issued_at)?;
        debug!(expires_at = %outcome.session.expires_at(), "Login succeeded");
        Ok(outcome)
    }

    fn interpret(
        &self,
        response: RawResponse,
        issued_at: DateTime<Utc>,
    ) -> Result<LoginOutcome, Error> {
        let status = response.status;

        if let Ok(body) = &response.body {
            if let Some(fields) = field_errors(body) {
                warn!(status = %status, "Login rejected");
                return Err(Error::Unauthenticated {
                    message: "invalid credentials".to_string(),
                    fields,
                });
            }
            if let Some(failure) = self.failure_code.and_then(|c| application_failure(body, c)) {
                return Err(Error::Upstream {
                    status: None,
                    code: Some(failure.code),
                    message: failure.message,
                });
            }
        }

        if !status.is_success() {
            let message = response
                .body
                .as_ref()
                .ok()
                .and_then(error_message)
                .unwrap_or_else(|| response.reason());
            return Err(match status {
                StatusCode::BAD_REQUEST
                | StatusCode::UNAUTHORIZED
                | StatusCode::FORBIDDEN
                | StatusCode::UNPROCESSABLE_ENTITY => {
                    warn!(status = %status, "Login rejected");
                    Error::unauthenticated(message)
                }
                _ => Error::Upstream {
                    status: Some(status.as_u16()),
                    code: None,
                    message,
                },
            });
        }

        let login: LoginResponse = serde_json::from_value(response.json()?)?;
        if login.access_token.is_empty() {
            return Err(Error::decode("login response carries an empty access token"));
        }

        let token = AccessToken::new(login.access_token);
        let expires_at = derive_expiry(&token, login.expires_in_access, issued_at)
            .ok_or_else(|| Error::decode("login response carries no token lifetime"))?;

        Ok(LoginOutcome {
            session: Session::new(token, issued_at, expires_at)?,
            user_type: login.user_type,
            city: login.city_data,
        })
    }
}
