use crate::error_code::DisplayableError;
use crate::transport::TransportError;
use thiserror::Error;

/// Where a configuration failure came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "cache.ttlSeconds")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the offending file or URL)
    pub details: Option<String>,
    /// Source of the error (e.g., "config_loader", "response_store")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the Ledgerkeep client.
///
/// Requests that went through the backend error interceptor only ever fail with
/// [`Error::Displayable`]; the other variants surface from lower layers (transport,
/// configuration loading, response decoding) when those are used directly.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Displayable(#[from] DisplayableError),

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// The user-facing error value, if this failure has already been translated.
    pub fn displayable(&self) -> Option<DisplayableError> {
        match self {
            Error::Displayable(err) => Some(*err),
            _ => None,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_renders_context() {
        let err = Error::configuration_with_context(
            "invalid value",
            ErrorContext::new()
                .with_field_path("cache.ttlSeconds")
                .with_source("config_loader"),
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid value (field: cache.ttlSeconds, source: config_loader)"
        );
        assert!(err.context().is_some());
    }

    #[test]
    fn displayable_error_shows_fixed_message() {
        let err = Error::from(DisplayableError::SessionExpired);
        assert_eq!(err.to_string(), "Please login again.");
        assert_eq!(err.displayable(), Some(DisplayableError::SessionExpired));
    }
}
