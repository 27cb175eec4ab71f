use crate::auth::BasicAuthSession;
use crate::cache::ResponseStore;
use crate::config::ConfigProvider;
use crate::interceptors::InterceptorPipeline;
use crate::transport::Transport;
use crate::types::models::DataEnvelope;
use crate::types::{HttpRequest, HttpResponse};
use crate::Result;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::info;

use super::builder::LedgerClientBuilder;

/// Client for the Ledgerkeep backend.
pub struct LedgerClient {
    pub(crate) config: Arc<ConfigProvider>,
    pub(crate) session: Arc<BasicAuthSession>,
    pub(crate) store: Arc<ResponseStore>,
    pub(crate) pipeline: InterceptorPipeline,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) base_url_override: Option<String>,
}

impl LedgerClient {
    pub fn builder() -> LedgerClientBuilder {
        LedgerClientBuilder::new()
    }

    pub fn session(&self) -> &Arc<BasicAuthSession> {
        &self.session
    }

    pub fn config(&self) -> &Arc<ConfigProvider> {
        &self.config
    }

    /// Read-only view of the response cache.
    pub fn cache(&self) -> &Arc<ResponseStore> {
        &self.store
    }

    /// Sends a request through the interceptor pipeline as-is.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.pipeline
            .execute(request, self.transport.as_ref())
            .await
    }

    /// Sends a request with the session's `Authorization` header attached.
    pub(crate) async fn send_authorized(&self, request: HttpRequest) -> Result<HttpResponse> {
        let request = match self.session.authorization() {
            Some(auth) => request.with_header("authorization", auth),
            None => request,
        };
        self.send(request).await
    }

    pub(crate) async fn base_url(&self) -> String {
        match &self.base_url_override {
            Some(url) => url.clone(),
            None => self.config.get().await.backend.base_url.clone(),
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url().await.trim_end_matches('/'), path)
    }

    /// Decodes the `data` field of a backend payload.
    pub(crate) fn decode_data<T: DeserializeOwned>(response: &HttpResponse) -> Result<Option<T>> {
        let envelope: DataEnvelope<T> = response.json()?;
        Ok(envelope.data)
    }

    /// Checks the credentials against the API root without touching the session.
    pub async fn verify_credentials(&self, user: &str, pass: &str) -> Result<()> {
        let token = BasicAuthSession::encode_credentials(user, pass);
        let request = HttpRequest::get(self.base_url().await)
            .with_header("authorization", format!("Basic {}", token));
        self.send(request).await?;
        Ok(())
    }

    /// Verifies the credentials and, on success, stores them in the session.
    pub async fn login(&self, user: &str, pass: &str) -> Result<()> {
        self.verify_credentials(user, pass).await?;
        self.session.login(user, pass);
        Ok(())
    }

    pub fn logout(&self) {
        info!("Logging out on request");
        self.session.logout();
    }
}
