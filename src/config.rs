//! Configuration loading
//!
//! Reads `~/.config/routinist/config.toml`. A missing file means defaults; a
//! malformed file also means defaults, plus a warning for the status line.

mod types;

use std::path::{Path, PathBuf};

pub use types::{AssistantConfig, CatalogConfig, Config, DEFAULT_CATALOG_PATH, DEFAULT_ENDPOINT};

use crate::error::RoutinistError;

const CONFIG_DIR: &str = "routinist";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file exists but could not be used
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return ConfigResult::default();
        }
        Err(e) => {
            log::warn!("Could not read config {}: {}", path.display(), e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read config: {}", e)),
            };
        }
    };

    match parse_config_toml(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{} (using defaults)", e)),
            }
        }
    }
}

pub fn parse_config_toml(content: &str) -> Result<Config, RoutinistError> {
    toml::from_str::<Config>(content)
        .map_err(|e| RoutinistError::InvalidConfig(e.message().to_string()))
}
