//! Bearer token type.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A bearer token for authenticated portal requests.
///
/// The token is opaque to the client except for one thing: when it is a JWT,
/// its `exp` claim is read as a hint for when the server will stop accepting
/// it. The signature is never checked; only the server can do that.
///
/// # Security
///
/// Never logged or displayed in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

#[derive(Deserialize)]
struct ExpiryClaim {
    exp: Option<i64>,
}

impl AccessToken {
    /// Create a new access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Handle the returned value securely. It grants access to the account.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `exp` claim if the token is a JWT carrying one.
    pub fn expiry_claim(&self) -> Option<DateTime<Utc>> {
        let payload = self.0.split('.').nth(1)?;
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        let claim: ExpiryClaim = serde_json::from_slice(&bytes).ok()?;
        DateTime::from_timestamp(claim.exp?, 0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
pub(crate) fn jwt_with_exp(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"42","exp":{}}}"#, exp));
    format!("{}.{}.signature", header, payload)
}
