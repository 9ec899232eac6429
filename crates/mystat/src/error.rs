//! Error types for the mystat library.
//!
//! Every network-backed operation returns [`crate::Result`]: `Ok(data)` for a
//! successful call, or an [`Error`] whose [`ErrorKind`] tells the caller which
//! of the failure families occurred.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The unified error type for mystat operations.
///
/// The variants are deliberately coarse: callers usually only need to know
/// whether to ask for new credentials, retry later, or report a bug.
/// Errors are `Clone` because a single login outcome is shared by every
/// request that waited on it.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Invalid credentials at login, or authorization rejected after the retry.
    #[error("authentication failed: {}", AuthFailure(.message, .fields))]
    Unauthenticated {
        /// Summary message.
        message: String,
        /// Field-level messages returned by the login endpoint, if any.
        fields: Vec<FieldError>,
    },

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with a well-formed error unrelated to authorization.
    #[error("upstream error: {}", UpstreamFailure(.status, .code, .message))]
    Upstream {
        /// HTTP status, when the failure was signalled by status.
        status: Option<u16>,
        /// Application-level `code` value, when signalled by the JSON envelope.
        code: Option<i64>,
        /// Message provided by the service.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Caller input rejected before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Discriminant of [`Error`], for callers that only branch on the failure family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthenticated,
    Transport,
    Upstream,
    Decode,
    InvalidInput,
}

impl Error {
    /// Returns the failure family of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unauthenticated { .. } => ErrorKind::Unauthenticated,
            Error::Transport(_) => ErrorKind::Transport,
            Error::Upstream { .. } => ErrorKind::Upstream,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    /// Returns the human-readable message without the category prefix.
    pub fn message(&self) -> String {
        match self {
            Error::Unauthenticated { message, .. }
            | Error::Upstream { message, .. }
            | Error::Decode { message } => message.clone(),
            Error::Transport(e) => e.to_string(),
            Error::InvalidInput(e) => e.to_string(),
        }
    }

    pub(crate) fn unauthenticated(message: impl Into<String>) -> Self {
        Error::Unauthenticated {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Error::Decode {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Body decoding failures surface through reqwest too, but they are
        // shape problems rather than transport problems.
        if err.is_decode() {
            Error::decode(err.to_string())
        } else {
            Error::Transport(TransportError::from(err))
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::decode(err.to_string())
    }
}

/// Transport-level errors.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

/// A single field-level message from the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Input validation errors.
#[derive(Debug, Clone, Error)]
pub enum InvalidInputError {
    /// Missing username or password.
    #[error("credentials: {reason}")]
    Credentials { reason: String },

    /// Invalid API base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Homework upload carries neither answer text nor a file.
    #[error("homework upload {homework_id} has neither answer text nor a file")]
    EmptyUpload { homework_id: i64 },

    /// A header value could not be encoded.
    #[error("invalid header value for {name}")]
    Header { name: String },

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}

struct AuthFailure<'a>(&'a String, &'a Vec<FieldError>);

impl fmt::Display for AuthFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        for (i, field) in self.1.iter().enumerate() {
            let sep = if i == 0 { " (" } else { ", " };
            write!(f, "{}{}", sep, field)?;
        }
        if !self.1.is_empty() {
            write!(f, ")")?;
        }
        Ok(())
    }
}

struct UpstreamFailure<'a>(&'a Option<u16>, &'a Option<i64>, &'a String);

impl fmt::Display for UpstreamFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.0 {
            write!(f, "HTTP {} ", status)?;
        }
        if let Some(code) = self.1 {
            write!(f, "[code {}] ", code)?;
        }
        write!(f, "{}", self.2)
    }
}
