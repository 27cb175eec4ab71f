use super::{Transport, TransportError};
use crate::types::{HttpRequest, HttpResponse};
use crate::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::env;
use std::time::Duration;
use tracing::debug;

/// `reqwest`-backed transport.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a client with env-overridable defaults:
    /// - `LEDGERKEEP_HTTP_TIMEOUT_SECS` (default 30)
    /// - `LEDGERKEEP_HTTP_POOL_IDLE_TIMEOUT_SECS` (default 90)
    pub fn new() -> Result<Self> {
        let timeout_secs = env::var("LEDGERKEEP_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_idle_timeout(Some(Duration::from_secs(
                env::var("LEDGERKEEP_HTTP_POOL_IDLE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(90),
            )))
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method().clone(), request.url());

        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }

        for (name, values) in request.headers() {
            for value in values {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in response.headers() {
            match value.to_str() {
                Ok(v) => headers
                    .entry(name.as_str().to_ascii_lowercase())
                    .or_default()
                    .push(v.to_string()),
                Err(_) => debug!(header = %name, url = %url, "Dropping non UTF-8 header value"),
            }
        }

        let body = response.bytes().await?;

        if !(200..300).contains(&status) {
            return Err(TransportError::Status { status, url, body });
        }

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
