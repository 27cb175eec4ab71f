//! Network transport: the terminal "send request, get response or fail" step
//! of the interceptor pipeline.

mod http;

pub use http::HttpTransport;

use crate::types::{HttpRequest, HttpResponse};
use async_trait::async_trait;
use bytes::Bytes;

/// Sends a request over the wire.
///
/// Implementations must report non-2xx answers as [`TransportError::Status`]
/// so that the backend error interceptor can inspect the body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String, body: Bytes },

    #[error("Transport error: {0}")]
    Other(String),
}
