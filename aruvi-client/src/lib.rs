//! Typed REST client for the Aruvi `/v1` API
//!
//! One request per operation; collections are refetched wholesale where a
//! caller needs a full reload. The server wraps every JSON response in the
//! `{success, data?, message?, error?}` envelope, which [`HttpClient`]
//! unwraps into [`ClientResult`].
//!
//! This crate is also the transport of the server's remote persistence
//! adapter, so its surface mirrors the API resources one to one.

mod client;
mod config;
mod error;
mod http;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
