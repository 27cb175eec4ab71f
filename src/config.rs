//! Client configuration and the sources it is loaded from.
//!
//! The configuration is resolved exactly once per [`ConfigProvider`]. A
//! source that fails to load is not fatal: the provider logs the failure and
//! falls back to the compiled-in defaults. Fields missing from a loaded
//! document are filled in from the defaults as well.
//!
//! Accepted document shape (JSON or YAML):
//!
//! ```json
//! {
//!   "backend": { "baseURL": "http://localhost:8080/api" },
//!   "cache": { "enabled": true, "ttlSeconds": 600 }
//! }
//! ```

use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{error, info};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    #[serde(rename = "baseURL", alias = "base_url", alias = "baseUrl")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    #[serde(rename = "ttlSeconds", alias = "ttl_seconds")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl AppConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.backend.base_url = base_url.into();
        self
    }

    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache.enabled = enabled;
        self
    }

    pub fn with_cache_ttl_seconds(mut self, ttl_seconds: u64) -> Self {
        self.cache.ttl_seconds = ttl_seconds;
        self
    }
}

/// Where a configuration document comes from.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn fetch(&self) -> Result<AppConfig>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// A fixed, in-memory configuration.
pub struct StaticConfigSource(pub AppConfig);

#[async_trait]
impl ConfigSource for StaticConfigSource {
    async fn fetch(&self) -> Result<AppConfig> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Local JSON or YAML file; `.yaml`/`.yml` are parsed as YAML, anything else as JSON.
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ConfigSource for FileConfigSource {
    async fn fetch(&self) -> Result<AppConfig> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let is_yaml = matches!(
            self.path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid YAML: {}", e),
                    ErrorContext::new()
                        .with_details(self.path.display().to_string())
                        .with_source("config_loader"),
                )
            })
        } else {
            serde_json::from_str(&content).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid JSON: {}", e),
                    ErrorContext::new()
                        .with_details(self.path.display().to_string())
                        .with_source("config_loader"),
                )
            })
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// JSON document served over HTTP (e.g. `assets/conf.json` next to a deployed frontend).
pub struct UrlConfigSource {
    url: String,
    client: reqwest::Client,
}

impl UrlConfigSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ConfigSource for UrlConfigSource {
    async fn fetch(&self) -> Result<AppConfig> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(crate::transport::TransportError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::configuration_with_context(
                format!("unexpected status {}", status.as_u16()),
                ErrorContext::new()
                    .with_details(self.url.clone())
                    .with_source("config_loader"),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(crate::transport::TransportError::from)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Resolves the configuration once and hands out the shared result.
pub struct ConfigProvider {
    source: Box<dyn ConfigSource>,
    resolved: OnceCell<Arc<AppConfig>>,
}

impl ConfigProvider {
    pub fn new(source: impl ConfigSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            resolved: OnceCell::new(),
        }
    }

    /// A provider that never performs I/O.
    pub fn fixed(config: AppConfig) -> Self {
        Self::new(StaticConfigSource(config))
    }

    /// Picks the source from `LEDGERKEEP_CONFIG`: an `http(s)://` URL, a file
    /// path, or (when unset) the compiled-in defaults.
    pub fn from_env() -> Self {
        match std::env::var("LEDGERKEEP_CONFIG") {
            Ok(location) if location.starts_with("http://") || location.starts_with("https://") => {
                Self::new(UrlConfigSource::new(location))
            }
            Ok(location) if !location.trim().is_empty() => {
                Self::new(FileConfigSource::new(location))
            }
            _ => Self::fixed(AppConfig::default()),
        }
    }

    /// Location of the underlying source, as shown in logs.
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Returns the configuration, loading it on first call.
    ///
    /// Never fails: a source error is logged and the defaults are used.
    pub async fn get(&self) -> Arc<AppConfig> {
        self.resolved
            .get_or_init(|| async {
                let config = match self.source.fetch().await {
                    Ok(config) => config,
                    Err(e) => {
                        error!(
                            source = %self.source.describe(),
                            error = %e,
                            "Failed to load configs, falling back to defaults"
                        );
                        AppConfig::default()
                    }
                };
                info!(
                    base_url = %config.backend.base_url,
                    cache_enabled = config.cache.enabled,
                    cache_ttl_seconds = config.cache.ttl_seconds,
                    "Using configs"
                );
                Arc::new(config)
            })
            .await
            .clone()
    }
}
