use super::{Interceptor, Next};
use crate::auth::SessionTerminator;
use crate::error_code::{BackendCustomCode, DisplayableError};
use crate::transport::TransportError;
use crate::types::{HttpRequest, HttpResponse};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Translates every failure into a [`DisplayableError`].
///
/// The backend reports error conditions as `{"error": {"custom_code": "..."}}`.
/// Recognized codes map to their displayable error; everything else, including
/// failures that never reached the backend, becomes `Default` with a warning
/// logged so that contract drift stays visible. `UNAUTHORIZED` additionally
/// terminates the session.
pub struct BackendErrorInterceptor {
    session: Arc<dyn SessionTerminator>,
}

impl BackendErrorInterceptor {
    pub fn new(session: Arc<dyn SessionTerminator>) -> Self {
        Self { session }
    }

    fn translate(&self, err: Error) -> DisplayableError {
        let (status, url, body) = match err {
            Error::Displayable(displayable) => return displayable,
            Error::Transport(TransportError::Status { status, url, body }) => (status, url, body),
            other => {
                warn!(error = %other, "Request failed without a backend error response");
                return DisplayableError::Default;
            }
        };

        let Some(code) = extract_custom_code(&body) else {
            warn!(status, url = %url, "No custom code present in backend response");
            return DisplayableError::Default;
        };

        let Some(known) = BackendCustomCode::parse(&code) else {
            warn!(status, url = %url, code = %code, "Unexpected custom code in backend response");
            return DisplayableError::Default;
        };

        if known.ends_session() {
            self.session.terminate_session();
        }
        known.displayable()
    }
}

#[async_trait]
impl Interceptor for BackendErrorInterceptor {
    async fn intercept(&self, request: HttpRequest, next: Next<'_>) -> Result<HttpResponse> {
        next.run(request)
            .await
            .map_err(|err| Error::Displayable(self.translate(err)))
    }

    fn name(&self) -> &'static str {
        "backend_error"
    }
}

/// Reads `error.custom_code` (or a top-level `custom_code`) from an error body.
pub(crate) fn extract_custom_code(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .pointer("/error/custom_code")
        .or_else(|| value.get("custom_code"))
        .and_then(serde_json::Value::as_str)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
}
