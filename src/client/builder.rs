use crate::auth::{BasicAuthSession, SessionTerminator};
use crate::cache::ResponseStore;
use crate::client::core::LedgerClient;
use crate::config::ConfigProvider;
use crate::interceptors::{InterceptorPipeline, DEFAULT_API_MARKER};
use crate::transport::{HttpTransport, Transport};
use crate::Result;
use std::sync::Arc;

/// Builder for [`LedgerClient`].
///
/// Everything not supplied gets a default: configuration from
/// `LEDGERKEEP_CONFIG`, a fresh session and response store, and a
/// `reqwest` transport.
pub struct LedgerClientBuilder {
    config: Option<Arc<ConfigProvider>>,
    session: Option<Arc<BasicAuthSession>>,
    store: Option<Arc<ResponseStore>>,
    transport: Option<Arc<dyn Transport>>,
    api_marker: Option<String>,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
}

impl LedgerClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            session: None,
            store: None,
            transport: None,
            api_marker: None,
            base_url_override: None,
        }
    }

    pub fn config(mut self, config: Arc<ConfigProvider>) -> Self {
        self.config = Some(config);
        self
    }

    /// Share a session with other components (e.g. to subscribe to logout events).
    pub fn session(mut self, session: Arc<BasicAuthSession>) -> Self {
        self.session = Some(session);
        self
    }

    /// Inject the response store; tests use this to observe cache contents.
    pub fn store(mut self, store: Arc<ResponseStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// URL fragment that marks cacheable backend calls (default `/api/`).
    pub fn api_marker(mut self, marker: impl Into<String>) -> Self {
        self.api_marker = Some(marker.into());
        self
    }

    /// Ignore `backend.baseURL` from the configuration and use this one.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<LedgerClient> {
        let config = self
            .config
            .unwrap_or_else(|| Arc::new(ConfigProvider::from_env()));
        let session = self
            .session
            .unwrap_or_else(|| Arc::new(BasicAuthSession::new()));
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(ResponseStore::new()));
        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new()?),
        };

        let terminator: Arc<dyn SessionTerminator> = session.clone();
        let pipeline = InterceptorPipeline::standard(
            store.clone(),
            config.clone(),
            terminator,
            self.api_marker
                .unwrap_or_else(|| DEFAULT_API_MARKER.to_string()),
        );

        Ok(LedgerClient {
            config,
            session,
            store,
            pipeline,
            transport,
            base_url_override: self.base_url_override,
        })
    }
}

impl Default for LedgerClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
