//! Configuration types
//!
//! Settings for the limiting helpers and the HTTP server, loaded from YAML.
//! Every field has a default, so an empty document is a valid configuration.

use crate::error::{Error, Result};
use crate::pagination::DEFAULT_MAX_LIMIT;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Upper bound on page size
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Number of items in the collection served over HTTP
    #[serde(default = "default_collection_size")]
    pub collection_size: u64,

    /// Public base URL used when building item hrefs
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,
}

fn default_max_limit() -> usize {
    DEFAULT_MAX_LIMIT
}

fn default_collection_size() -> u64 {
    2000
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_limit: default_max_limit(),
            collection_size: default_collection_size(),
            base_url: default_base_url(),
            server: ServerSettings::default(),
        }
    }
}

impl ApiConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), max_limit = config.max_limit, "Loaded config");
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be served
    pub fn validate(&self) -> Result<()> {
        if self.max_limit == 0 {
            return Err(Error::invalid_config(
                "max_limit",
                "must be greater than zero",
            ));
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_config("base_url", e.to_string()))?;

        self.server.addr()?;

        Ok(())
    }
}

// ============================================================================
// Server Settings
// ============================================================================

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerSettings {
    /// Socket address to bind; `host` must be an IP literal
    pub fn addr(&self) -> Result<SocketAddr> {
        let host: IpAddr = self
            .host
            .parse()
            .map_err(|e| Error::invalid_config("server.host", format!("{}: {e}", self.host)))?;
        Ok(SocketAddr::new(host, self.port))
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
