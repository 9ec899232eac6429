//! Authentication types and session management.
//!
//! A [`Credentials`] pair is exchanged for a [`Session`] by the
//! [`Authenticator`]. The session is a plain value; the client decides when to
//! replace it.

mod authenticator;
mod credentials;
mod session;
mod tokens;

pub use authenticator::{Authenticator, LoginOutcome};
pub use credentials::Credentials;
pub use session::Session;
pub use tokens::AccessToken;
