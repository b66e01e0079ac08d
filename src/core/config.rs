//! Persisted registry membership and tuning knobs.
//!
//! The config file (`config.json` in the config directory) stores which
//! repositories are registered and how they were added. Status is never
//! persisted; it is recomputed by a refresh after loading.

use crate::core::cached_oracle::DEFAULT_CACHE_TTL;
use crate::core::dirs::get_config_directory;
use crate::core::discovery::DEFAULT_SCAN_DEPTH;
use crate::core::error::{NavigatorError, Result};
use crate::core::registry::RepositoryRegistry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub auto_discover: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NavigatorConfig {
    pub repositories: Vec<RepositoryConfig>,
    pub cache_ttl_ms: u64,
    pub scan_depth: usize,
    pub last_saved: Option<DateTime<Utc>>,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            repositories: Vec::new(),
            cache_ttl_ms: DEFAULT_CACHE_TTL.as_millis() as u64,
            scan_depth: DEFAULT_SCAN_DEPTH,
            last_saved: None,
        }
    }
}

impl NavigatorConfig {
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE_NAME))
    }

    /// Load the config from the default location, creating it if missing.
    pub fn load_or_create() -> Result<Self> {
        let config_file = Self::default_path()?;
        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            let mut config = Self::default();
            config.save_to(&config_file)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {}", path.display());
        let content =
            fs::read_to_string(path).map_err(|e| NavigatorError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| NavigatorError::config_parse_failed(path, e))
    }

    pub fn save(&mut self) -> Result<()> {
        let config_file = Self::default_path()?;
        self.save_to(&config_file)
    }

    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| NavigatorError::config_write_failed(parent, e))?;
        }
        self.last_saved = Some(Utc::now());
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| NavigatorError::config_write_failed(path, e))?;
        log::debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    /// Build a registry holding every configured repository, in order.
    pub fn to_registry(&self) -> RepositoryRegistry {
        let mut registry = RepositoryRegistry::new();
        for repository in &self.repositories {
            if repository.auto_discover {
                registry.add_discovered(&repository.path);
            } else {
                registry.add_repository(&repository.path);
            }
        }
        registry
    }

    /// Replace the stored membership with the registry's.
    pub fn update_from_registry(&mut self, registry: &RepositoryRegistry) {
        self.repositories = registry
            .records()
            .iter()
            .map(|record| RepositoryConfig {
                path: record.path.clone(),
                auto_discover: record.auto_discover,
            })
            .collect();
    }
}
