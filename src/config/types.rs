// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Completion proxy used when no endpoint is configured
pub const DEFAULT_ENDPOINT: &str = "https://billowing-wildflower-1d19.bxv5614.workers.dev/";

/// Catalog file used when neither the CLI nor the config names one
pub const DEFAULT_CATALOG_PATH: &str = "products.json";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_PATH)
}

/// Assistant configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssistantConfig {
    /// Completion endpoint receiving `{messages: [...]}` POSTs
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Keywords appended to the built-in topical vocabulary
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        AssistantConfig {
            endpoint: default_endpoint(),
            extra_keywords: Vec::new(),
        }
    }
}

/// Catalog configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            path: default_catalog_path(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}
