//! HTTP transport and wire formats.
//!
//! This module knows how to put a [`RequestSpec`] on the wire and read the
//! reply back; deciding what a reply means is left to the executor.

mod client;
mod request;
pub(crate) mod wire;

pub(crate) use client::{HttpClient, RawResponse, language_header};
pub use request::{FilePart, Method, MultipartBody, RequestBody, RequestSpec};
