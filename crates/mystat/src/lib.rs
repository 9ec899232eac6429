//! mystat - client library for the MyStat student portal
//!
//! The portal hands out short-lived bearer tokens in exchange for a username
//! and password. This library keeps one such token per [`Client`], logs in
//! again when it expires or is refused, and returns every reply as a typed
//! [`Result`].
//!
//! # Example
//!
//! ```no_run
//! use mystat::{Client, ClientConfig, Credentials, HomeworkQuery};
//!
//! # async fn example() -> Result<(), mystat::Error> {
//! let client = Client::new(ClientConfig::default(), Credentials::new("student", "password"))?;
//!
//! let page = client.homework_list(HomeworkQuery::default()).await?;
//! for homework in page.items {
//!     println!("{}: {}", homework.name_spec, homework.theme);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Failures are values, not panics: match on [`Error::kind`] to tell bad
//! credentials apart from network trouble or an error reported by the portal.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
mod executor;
pub mod http;
pub mod models;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{AccessToken, Credentials, LoginOutcome, Session};
pub use client::{Client, ClientState, HomeworkQuery, HomeworkUpload};
pub use config::ClientConfig;
pub use error::{Error, ErrorKind};
pub use http::{Method, RequestSpec};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
