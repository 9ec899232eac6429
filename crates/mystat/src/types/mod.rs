//! Validated value types shared across the client.

mod api_url;

pub use api_url::{ApiUrl, DEFAULT_API_URL};
