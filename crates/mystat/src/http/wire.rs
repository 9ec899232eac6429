//! Wire-level request/response shapes owned by the portal.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FieldError;
use crate::models::CityData;

/// Login endpoint, relative to the API root.
pub const LOGIN: &str = "auth/login";

/// Application identifier the portal expects on every login.
pub const APPLICATION_KEY: &str =
    "6a56a5df2667e65aab73ce76d1dd737f7d1faef9c52e8b8c55ac75f565d8e8a6";

/// Locale header sent with authenticated requests.
pub const LANGUAGE_HEADER: &str = "x-language";

/// Request body for the login call.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub application_key: &'a str,
    pub id_city: Option<i64>,
    pub username: &'a str,
    pub password: &'a str,
}

impl std::fmt::Debug for LoginRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("id_city", &self.id_city)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Successful login response.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in_access: Option<i64>,
    #[serde(default)]
    pub expires_in_refresh: Option<i64>,
    #[serde(default)]
    pub user_type: Option<i64>,
    #[serde(default)]
    pub city_data: Option<CityData>,
}

/// Application-level failure carried inside a successful HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationFailure {
    pub code: i64,
    pub message: String,
}

/// Detects the `{code, message, ...}` failure envelope some endpoint
/// families use instead of HTTP status codes.
pub fn application_failure(body: &Value, failure_code: i64) -> Option<ApplicationFailure> {
    let object = body.as_object()?;
    let code = object.get("code")?.as_i64()?;
    let message = object.get("message")?.as_str()?;
    (code == failure_code).then(|| ApplicationFailure {
        code,
        message: message.to_string(),
    })
}

/// Parses the login failure list: an array of `{field, message}` objects.
pub fn field_errors(body: &Value) -> Option<Vec<FieldError>> {
    let items = body.as_array()?;
    if items.is_empty() {
        return None;
    }
    serde_json::from_value(body.clone()).ok()
}

/// Best-effort human-readable message from an error response body.
pub fn error_message(body: &Value) -> Option<String> {
    if let Some(fields) = field_errors(body) {
        let joined = fields
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Some(joined);
    }
    body.as_object()
        .and_then(|o| o.get("message").or_else(|| o.get("error")))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
