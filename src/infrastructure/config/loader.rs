//! Figment-based configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project config file, read from the working directory
pub const CONFIG_FILE: &str = "message-search.yaml";

/// Local override file, read after the project config
pub const LOCAL_CONFIG_FILE: &str = "message-search.local.yaml";

/// Environment variable prefix (`MESSAGE_SEARCH_CACHE__TTL_SECS=60`)
pub const ENV_PREFIX: &str = "MESSAGE_SEARCH_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `server.host` is blank
    #[error("Server host cannot be empty")]
    EmptyHost,

    /// `upstream.url` is not an http(s) URL
    #[error("Invalid upstream URL: {0}. Must start with http:// or https://")]
    InvalidUpstreamUrl(String),

    /// `upstream.timeout_secs` is zero
    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    /// `cache.ttl_secs` is zero
    #[error("Invalid ttl_secs: {0}. Must be at least 1")]
    InvalidTtl(u64),

    /// `search.default_page_size` is zero or above `search.max_page_size`
    #[error("Invalid default_page_size: {0}. Must be between 1 and max_page_size ({1})")]
    InvalidPageSize(usize, usize),

    /// `logging.level` is not a known level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. message-search.yaml (optional)
    /// 3. message-search.local.yaml (optional)
    /// 4. Environment variables (MESSAGE_SEARCH_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(CONFIG_FILE))
            .merge(Yaml::file(LOCAL_CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring env overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        let url = &config.upstream.url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUpstreamUrl(url.clone()));
        }

        if config.upstream.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.upstream.timeout_secs));
        }

        if config.cache.ttl_secs == 0 {
            return Err(ConfigError::InvalidTtl(config.cache.ttl_secs));
        }

        let search = &config.search;
        if search.default_page_size == 0 || search.default_page_size > search.max_page_size {
            return Err(ConfigError::InvalidPageSize(
                search.default_page_size,
                search.max_page_size,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
