//! Backend custom codes and the user-displayable errors they map to.
//!
//! The Ledgerkeep backend attaches a `custom_code` token to its error bodies.
//! The client only ever surfaces a small, closed set of [`DisplayableError`]
//! values to callers; every code it does not recognize collapses to
//! [`DisplayableError::Default`].
//!
//! | Custom code              | Displayable error      |
//! |--------------------------|------------------------|
//! | `UNAUTHORIZED`           | `SessionExpired`       |
//! | `ACCOUNT_ALREADY_EXISTS` | `AccountAlreadyExists` |
//! | `ACCOUNT_IS_IN_USE`      | `AccountInUse`         |
//! | anything else            | `Default`              |
//!
//! ## Example
//!
//! ```rust
//! use ledgerkeep::error_code::{BackendCustomCode, DisplayableError};
//!
//! assert_eq!(
//!     DisplayableError::from_custom_code("ACCOUNT_IS_IN_USE"),
//!     DisplayableError::AccountInUse
//! );
//! assert_eq!(BackendCustomCode::parse("SOMETHING_NEW"), None);
//! assert_eq!(DisplayableError::Default.message(), "Please try again later.");
//! ```

use std::fmt;

/// Errors that can be shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayableError {
    /// Catch-all for anything the client does not recognize
    Default,
    /// The backend rejected the stored credentials
    SessionExpired,
    /// Account creation collided with an existing account ID
    AccountAlreadyExists,
    /// Account deletion refused because transactions reference it
    AccountInUse,
}

impl DisplayableError {
    /// The fixed, user-facing message.
    #[inline]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Default => "Please try again later.",
            Self::SessionExpired => "Please login again.",
            Self::AccountAlreadyExists => "This account ID is not available.",
            Self::AccountInUse => "This account is being used by transactions.",
        }
    }

    /// Maps a backend custom code to its displayable error; unknown codes yield `Default`.
    pub fn from_custom_code(code: &str) -> Self {
        BackendCustomCode::parse(code)
            .map(|c| c.displayable())
            .unwrap_or(Self::Default)
    }
}

impl fmt::Display for DisplayableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for DisplayableError {}

/// Custom codes the backend is known to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendCustomCode {
    Unauthorized,
    AccountAlreadyExists,
    AccountIsInUse,
}

impl BackendCustomCode {
    /// Returns the wire token (e.g., `"UNAUTHORIZED"`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::AccountAlreadyExists => "ACCOUNT_ALREADY_EXISTS",
            Self::AccountIsInUse => "ACCOUNT_IS_IN_USE",
        }
    }

    /// Exact, case-sensitive lookup of a wire token.
    pub fn parse(code: &str) -> Option<Self> {
        let code = match code {
            "UNAUTHORIZED" => Self::Unauthorized,
            "ACCOUNT_ALREADY_EXISTS" => Self::AccountAlreadyExists,
            "ACCOUNT_IS_IN_USE" => Self::AccountIsInUse,
            _ => return None,
        };
        Some(code)
    }

    #[inline]
    pub fn displayable(&self) -> DisplayableError {
        match self {
            Self::Unauthorized => DisplayableError::SessionExpired,
            Self::AccountAlreadyExists => DisplayableError::AccountAlreadyExists,
            Self::AccountIsInUse => DisplayableError::AccountInUse,
        }
    }

    /// Whether this code means the session must be terminated.
    #[inline]
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl fmt::Display for BackendCustomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_codes_round_trip_through_the_wire_token() {
        for code in [
            BackendCustomCode::Unauthorized,
            BackendCustomCode::AccountAlreadyExists,
            BackendCustomCode::AccountIsInUse,
        ] {
            assert_eq!(BackendCustomCode::parse(code.as_str()), Some(code));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(BackendCustomCode::parse("unauthorized"), None);
        assert_eq!(
            DisplayableError::from_custom_code("unauthorized"),
            DisplayableError::Default
        );
    }

    #[test]
    fn only_unauthorized_ends_the_session() {
        assert!(BackendCustomCode::Unauthorized.ends_session());
        assert!(!BackendCustomCode::AccountAlreadyExists.ends_session());
        assert!(!BackendCustomCode::AccountIsInUse.ends_session());
    }

    #[test]
    fn messages_are_fixed() {
        assert_eq!(
            DisplayableError::AccountAlreadyExists.to_string(),
            "This account ID is not available."
        );
        assert_eq!(
            DisplayableError::AccountInUse.to_string(),
            "This account is being used by transactions."
        );
    }
}
