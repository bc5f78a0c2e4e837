//! Configuration types for the property dashboard service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the compiled frontend bundle served under /pkg
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            site_root: default_site_root(),
        }
    }
}

/// Properties served per tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Tenant assumed for requests without an x-tenant-id header
    #[serde(default = "default_tenant")]
    pub default_tenant: String,
    /// Empty means the built-in sample catalog
    #[serde(default)]
    pub tenants: Vec<TenantCatalog>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_tenant: default_tenant(),
            tenants: Vec::new(),
        }
    }
}

/// The properties owned by one tenant, in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantCatalog {
    pub tenant: String,
    #[serde(default)]
    pub properties: Vec<CatalogProperty>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogProperty {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub revenue: Option<RevenueFigures>,
}

/// Revenue reported for a property by /dashboard/summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueFigures {
    pub total: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub reservations: u32,
}

fn default_port() -> u16 {
    11120
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

fn default_tenant() -> String {
    "default_tenant".to_string()
}

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::ServiceError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
