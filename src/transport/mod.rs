//! Transport capabilities.
//!
//! The request layer never talks HTTP directly: it hands a [`RequestParts`]
//! to a [`SyncTransport`] or an [`AsyncTransport`] and gets back a
//! [`RawResponse`] or a [`TransportError`]. Connection pooling, timeouts and
//! proxying all live behind these traits, so tests can substitute transports
//! without touching the request pipeline. The `reqwest`-backed defaults are
//! in [`http`].

mod http;

pub use http::{AsyncHttpTransport, BlockingHttpTransport};

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::BTreeMap;
use url::Url;

/// HTTP verbs the API surface uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Everything a transport needs for one HTTP exchange.
///
/// Query parameters stay separate from the URL so each transport can encode
/// them with its own machinery.
#[derive(Debug, Clone)]
pub struct RequestParts {
    pub method: Method,
    pub url: Url,
    pub headers: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
    pub body: Option<Bytes>,
}

/// Raw result of an HTTP exchange, before classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}

/// Blocking transport. One call, one response, on the caller's thread.
pub trait SyncTransport: Send + Sync {
    fn request(&self, parts: RequestParts) -> Result<RawResponse, TransportError>;
}

/// Non-blocking transport driven by the reactor.
#[async_trait]
pub trait AsyncTransport: Send + Sync {
    async fn request(&self, parts: RequestParts) -> Result<RawResponse, TransportError>;
}
