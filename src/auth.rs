//! Basic-auth session state and login/logout notifications.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::sync::{PoisonError, RwLock};
use tokio::sync::broadcast;
use tracing::info;

/// Notification published whenever the session changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn,
    LoggedOut,
}

/// The single operation the backend error interceptor may perform on a session.
pub trait SessionTerminator: Send + Sync {
    /// Drops the stored credentials and notifies subscribers.
    fn terminate_session(&self);
}

/// Holds the Basic credentials of the signed-in user.
pub struct BasicAuthSession {
    token: RwLock<Option<String>>,
    events: broadcast::Sender<SessionEvent>,
}

impl BasicAuthSession {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            token: RwLock::new(None),
            events,
        }
    }

    /// Base64 of `user:pass`, as sent after `Basic `.
    pub fn encode_credentials(user: &str, pass: &str) -> String {
        STANDARD.encode(format!("{}:{}", user, pass))
    }

    pub fn login(&self, user: &str, pass: &str) {
        let token = Self::encode_credentials(user, pass);
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
        info!(user = %user, "Logged in");
        let _ = self.events.send(SessionEvent::LoggedIn);
    }

    pub fn logout(&self) {
        self.token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        info!("Logged out");
        let _ = self.events.send(SessionEvent::LoggedOut);
    }

    /// Subscribe to login/logout notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Value for the `Authorization` header, if logged in.
    pub fn authorization(&self) -> Option<String> {
        self.token().map(|t| format!("Basic {}", t))
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }
}

impl Default for BasicAuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTerminator for BasicAuthSession {
    fn terminate_session(&self) {
        self.logout();
    }
}
