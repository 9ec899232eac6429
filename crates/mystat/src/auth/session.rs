//! Bearer session and expiry policy.

use chrono::{DateTime, Duration, Utc};

use crate::error::Error;

use super::tokens::AccessToken;

/// `expires_in_access` values at or above this are unix timestamps rather
/// than lifetimes. 10^9 seconds is roughly 31 years, far beyond any token
/// lifetime, and any real timestamp since 2001 exceeds it.
const ABSOLUTE_EXPIRY_THRESHOLD: i64 = 1_000_000_000;

/// An issued bearer token together with the window in which it is usable.
///
/// A `Session` is an immutable value. Re-authentication produces a new one
/// that replaces the old one wholesale; nothing patches a live session.
///
/// Invariant: `expires_at` is strictly after `issued_at`.
#[derive(Clone)]
pub struct Session {
    token: AccessToken,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session, enforcing the expiry invariant.
    ///
    /// # Errors
    ///
    /// Returns a decode error if `expires_at` is not after `issued_at`,
    /// which only happens when the service hands out an already dead token.
    pub fn new(
        token: AccessToken,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<Self, Error> {
        if expires_at <= issued_at {
            return Err(Error::decode(format!(
                "token expires at {} which is not after its issue time {}",
                expires_at, issued_at
            )));
        }
        Ok(Self {
            token,
            issued_at,
            expires_at,
        })
    }

    /// Rebuild a session from a token and expiry exported earlier.
    ///
    /// The original issue time is not known; it is taken as `now`, or just
    /// before `expires_at` when the token has already lapsed, so the
    /// invariant holds either way.
    pub fn restore(token: AccessToken, expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let issued_at = if expires_at > now {
            now
        } else {
            expires_at - Duration::seconds(1)
        };
        Self {
            token,
            issued_at,
            expires_at,
        }
    }

    /// Returns the bearer token.
    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Returns when the token was obtained.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns when the token stops being usable.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns true once `now` has reached the expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Returns true if both sessions carry the same token issuance.
    pub(crate) fn same_issue(&self, other: &Session) -> bool {
        self.token == other.token && self.issued_at == other.issued_at
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Derive the expiry instant for a freshly issued token.
///
/// Two sources may be available: the `expires_in_access` field of the login
/// response (a lifetime in seconds, or an absolute unix timestamp when it is
/// large enough to be one) and the `exp` claim of a JWT token. When both are
/// present the earlier one wins.
pub(crate) fn derive_expiry(
    token: &AccessToken,
    expires_in_access: Option<i64>,
    issued_at: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let from_field = expires_in_access.and_then(|value| {
        if value >= ABSOLUTE_EXPIRY_THRESHOLD {
            DateTime::from_timestamp(value, 0)
        } else {
            issued_at.checked_add_signed(Duration::try_seconds(value)?)
        }
    });
    let from_claim = token.expiry_claim();

    match (from_field, from_claim) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
