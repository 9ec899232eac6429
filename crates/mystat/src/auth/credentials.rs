//! Login credentials type.

use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Username and password used to log in to the portal.
///
/// Credentials are never persisted by the library; the client only keeps
/// them in memory so it can log in again when the access token expires.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use mystat::Credentials;
///
/// let creds = Credentials::new("student_42", "hunter2");
/// assert_eq!(creds.username(), "student_42");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// Only used when building the login request body.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Checks that both parts are present. Anything beyond emptiness is left
    /// to the service to judge.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.username.trim().is_empty() {
            return Err(InvalidInputError::Credentials {
                reason: "username must not be empty".to_string(),
            }
            .into());
        }
        if self.password.is_empty() {
            return Err(InvalidInputError::Credentials {
                reason: "password must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
