//! Request interceptors sitting between the API client and the transport.
//!
//! An [`Interceptor`] receives the outgoing request together with a [`Next`]
//! continuation. It may answer on its own (e.g. a cache hit), or call
//! [`Next::run`] and transform whatever comes back. The chain terminates at a
//! [`Transport`].
//!
//! The standard chain, as built by [`InterceptorPipeline::standard`], is:
//!
//! ```text
//! caller → CachingInterceptor → BackendErrorInterceptor → Transport
//! ```

mod backend;
mod caching;

pub use backend::BackendErrorInterceptor;
pub use caching::{CachingInterceptor, DEFAULT_API_MARKER};

use crate::auth::SessionTerminator;
use crate::cache::ResponseStore;
use crate::config::ConfigProvider;
use crate::transport::Transport;
use crate::types::{HttpRequest, HttpResponse};
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Interceptor: Send + Sync {
    async fn intercept(&self, request: HttpRequest, next: Next<'_>) -> Result<HttpResponse>;

    fn name(&self) -> &'static str;
}

/// The rest of the chain after the current interceptor.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    chain: &'a [Arc<dyn Interceptor>],
    transport: &'a dyn Transport,
}

impl<'a> Next<'a> {
    pub fn new(chain: &'a [Arc<dyn Interceptor>], transport: &'a dyn Transport) -> Self {
        Self { chain, transport }
    }

    /// Hands the request to the next interceptor, or to the transport at the end of the chain.
    pub async fn run(self, request: HttpRequest) -> Result<HttpResponse> {
        match self.chain.split_first() {
            Some((current, rest)) => {
                current
                    .intercept(request, Next::new(rest, self.transport))
                    .await
            }
            None => Ok(self.transport.send(request).await?),
        }
    }
}

/// An ordered interceptor chain; the first interceptor added is the outermost.
pub struct InterceptorPipeline {
    pub(crate) interceptors: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorPipeline {
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    /// Caching first, backend error translation second. Only URLs containing
    /// `api_marker` are cached.
    pub fn standard(
        store: Arc<ResponseStore>,
        config: Arc<ConfigProvider>,
        session: Arc<dyn SessionTerminator>,
        api_marker: impl Into<String>,
    ) -> Self {
        Self::new()
            .with(CachingInterceptor::new(store, config).with_api_marker(api_marker))
            .with(BackendErrorInterceptor::new(session))
    }

    pub fn with<I: Interceptor + 'static>(mut self, interceptor: I) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.interceptors.iter().map(|ic| ic.name()).collect()
    }

    /// Runs the request through every interceptor and then the transport.
    pub async fn execute(
        &self,
        request: HttpRequest,
        transport: &dyn Transport,
    ) -> Result<HttpResponse> {
        Next::new(&self.interceptors, transport).run(request).await
    }
}

impl Default for InterceptorPipeline {
    fn default() -> Self {
        Self::new()
    }
}
