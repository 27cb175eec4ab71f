//! Shared fakes for pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use ledgerkeep::transport::{Transport, TransportError};
use ledgerkeep::{HttpRequest, HttpResponse, SessionTerminator};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

type Responder =
    Box<dyn Fn(&HttpRequest, usize) -> Result<HttpResponse, TransportError> + Send + Sync>;

/// In-memory transport answering from a closure and recording every request.
pub struct ScriptedTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responder: Responder,
    latency: Option<Duration>,
}

impl ScriptedTransport {
    /// The closure receives the request and the zero-based call index.
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&HttpRequest, usize) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
            latency: None,
        })
    }

    /// Answers 200 with the request URL and call number, so every network answer is distinct.
    pub fn echo() -> Arc<Self> {
        Self::new(|req, n| {
            Ok(HttpResponse::new(200, format!("{} #{}", req.url_with_params(), n))
                .with_header("content-type", "text/plain"))
        })
    }

    pub fn always(status: u16, body: &'static str) -> Arc<Self> {
        Self::new(move |req, _| {
            if (200..300).contains(&status) {
                Ok(HttpResponse::new(status, body))
            } else {
                Err(TransportError::Status {
                    status,
                    url: req.url().to_string(),
                    body: body.into(),
                })
            }
        })
    }

    pub fn with_latency(responder: Arc<Self>, latency: Duration) -> Arc<Self> {
        let inner = Arc::try_unwrap(responder).unwrap_or_else(|_| panic!("transport already shared"));
        Arc::new(Self {
            latency: Some(latency),
            ..inner
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let n = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len() - 1
        };
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        (self.responder)(&request, n)
    }
}

/// Counts session terminations.
#[derive(Default)]
pub struct CountingTerminator {
    count: AtomicUsize,
}

impl CountingTerminator {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl SessionTerminator for CountingTerminator {
    fn terminate_session(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

struct WarnCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Installs a thread-local subscriber counting warn-level events.
pub fn capture_warnings() -> (tracing::subscriber::DefaultGuard, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
    (tracing::subscriber::set_default(subscriber), count)
}
