//! Centralized initialization shared by every command.
//!
//! [`CommandContext::initialize`] loads the config, rebuilds the registry
//! from it and wraps the git oracle in a cache using the configured TTL.
//! Commands that change membership call [`CommandContext::save`] afterwards.

use crate::core::{
    cached_oracle::CachedOracle, config::NavigatorConfig, error::Result, oracle::GitOracle,
    registry::RepositoryRegistry,
};
use std::path::PathBuf;

pub struct CommandContext {
    pub config: NavigatorConfig,
    config_path: PathBuf,
    pub registry: RepositoryRegistry,
    pub oracle: CachedOracle<GitOracle>,
}

impl CommandContext {
    /// Load from the default config location.
    pub fn initialize() -> Result<Self> {
        let config_path = NavigatorConfig::default_path()?;
        if !config_path.exists() {
            NavigatorConfig::load_or_create()?;
        }
        Self::initialize_from(config_path)
    }

    /// Load from an explicit config file.
    pub fn initialize_from(config_path: PathBuf) -> Result<Self> {
        let config = NavigatorConfig::load_from(&config_path)?;
        let registry = config.to_registry();
        let oracle = CachedOracle::with_ttl(GitOracle::new(), config.cache_ttl());

        log::debug!(
            "Initialized with {} registered repositories (cache TTL {:?})",
            registry.len(),
            oracle.ttl()
        );

        Ok(Self {
            config,
            config_path,
            registry,
            oracle,
        })
    }

    /// Persist the registry membership.
    pub fn save(&mut self) -> Result<()> {
        self.config.update_from_registry(&self.registry);
        self.config.save_to(&self.config_path)
    }
}
