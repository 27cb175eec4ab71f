//! Cache key derivation.

use crate::types::HttpRequest;
use sha2::{Digest, Sha256};

/// Deterministic key of a cacheable request.
///
/// Derived from the serialized headers and the full URL including query
/// parameters, so two requests that differ only in credentials or filters
/// never share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub hash: String,
}

impl CacheKey {
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn for_request(request: &HttpRequest) -> Self {
        let headers = serde_json::to_string(request.headers()).unwrap_or_default();
        let canonical = format!("{}::{}", headers, request.url_with_params());
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        let hash: String = hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();
        Self::new(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}
