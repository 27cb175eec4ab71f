use super::{Interceptor, Next};
use crate::cache::{CacheKey, ResponseStore, Sweeper};
use crate::config::{CacheConfig, ConfigProvider};
use crate::types::{HttpRequest, HttpResponse};
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Path fragment identifying calls to the backend API.
pub const DEFAULT_API_MARKER: &str = "/api/";

/// Serves repeated backend reads from memory.
///
/// - Any non-GET request empties the whole store before it is forwarded.
/// - GET requests to the backend API are answered from the store when the
///   configuration enables caching; misses are forwarded and successful
///   responses stored.
/// - Once the configuration is known, a [`Sweeper`] empties the store every
///   `cache.ttlSeconds`.
///
/// Concurrent identical misses are not coalesced: each goes to the network
/// and the last response to arrive is the one kept.
pub struct CachingInterceptor {
    store: Arc<ResponseStore>,
    config: Arc<ConfigProvider>,
    api_marker: String,
    sweeper: OnceLock<Option<Sweeper>>,
}

impl CachingInterceptor {
    pub fn new(store: Arc<ResponseStore>, config: Arc<ConfigProvider>) -> Self {
        Self {
            store,
            config,
            api_marker: DEFAULT_API_MARKER.to_string(),
            sweeper: OnceLock::new(),
        }
    }

    /// Overrides the URL fragment that marks a request as a backend API call.
    pub fn with_api_marker(mut self, marker: impl Into<String>) -> Self {
        self.api_marker = marker.into();
        self
    }

    pub fn store(&self) -> &Arc<ResponseStore> {
        &self.store
    }

    /// Interval of the running sweep, if one was scheduled.
    pub fn sweep_interval(&self) -> Option<Duration> {
        self.sweeper.get().and_then(|s| s.as_ref()).map(Sweeper::ttl)
    }

    fn is_cacheable(&self, request: &HttpRequest) -> bool {
        request.is_read() && request.url().contains(self.api_marker.as_str())
    }

    fn ensure_sweeper(&self, cache: &CacheConfig) {
        self.sweeper.get_or_init(|| {
            if !cache.enabled {
                return None;
            }
            if cache.ttl_seconds == 0 {
                warn!("Cache TTL is zero; periodic cache clearing disabled");
                return None;
            }
            let sweeper = Sweeper::spawn(&self.store, cache.ttl());
            match &sweeper {
                Some(_) => {
                    info!(ttl_seconds = cache.ttl_seconds, "Scheduling periodic cache clearing")
                }
                None => warn!(
                    ttl_seconds = cache.ttl_seconds,
                    "Cache TTL too large to schedule; periodic cache clearing disabled"
                ),
            }
            sweeper
        });
    }
}

#[async_trait]
impl Interceptor for CachingInterceptor {
    async fn intercept(&self, request: HttpRequest, next: Next<'_>) -> Result<HttpResponse> {
        if !request.is_read() {
            let cleared = self.store.clear();
            debug!(method = %request.method(), url = %request.url(), cleared, "Write request, cache cleared");
            return next.run(request).await;
        }

        if !self.is_cacheable(&request) {
            return next.run(request).await;
        }

        let config = self.config.get().await;
        self.ensure_sweeper(&config.cache);
        if !config.cache.enabled {
            return next.run(request).await;
        }

        let key = CacheKey::for_request(&request);
        if let Some(cached) = self.store.get(&key) {
            debug!(key = %key, url = %request.url(), "Cache hit");
            return Ok(cached);
        }

        debug!(key = %key, url = %request.url(), "Cache miss");
        let response = next.run(request).await?;
        self.store.insert(key, response.clone());
        Ok(response)
    }

    fn name(&self) -> &'static str {
        "caching"
    }
}
