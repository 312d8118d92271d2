//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file and applying environment overrides.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{CalculatorError, CalculatorResult};

use super::types::ServiceConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "TAX_CALCULATOR_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "./config/service.yaml";

/// Environment variable overriding `bracket_api.base_url`.
pub const TAX_API_URL_ENV: &str = "TAX_API_URL";

/// Environment variable overriding `listen_addr`.
pub const LISTEN_ADDR_ENV: &str = "LISTEN_ADDR";

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// listen_addr: "0.0.0.0:8080"
/// bracket_api:
///   base_url: "http://localhost:5001"
///   timeout_secs: 7
/// supported_tax_years:
///   first: 2019
///   last: 2022
/// ```
///
/// # Example
///
/// ```no_run
/// use tax_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?.with_env_overrides()?;
/// println!("Bracket service: {}", loader.config().bracket_api.base_url);
/// # Ok::<(), tax_calculator::error::CalculatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or is missing a required field
    /// - A value fails validation (empty base URL, zero timeout, inverted year range)
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalculatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Loads configuration from the file named by `TAX_CALCULATOR_CONFIG`,
    /// falling back to [`DEFAULT_CONFIG_PATH`], then applies environment
    /// overrides.
    pub fn from_env() -> CalculatorResult<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)?.with_env_overrides()
    }

    /// Parses configuration from YAML text. `source` names the origin in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> CalculatorResult<Self> {
        let config: ServiceConfig =
            serde_yaml::from_str(content).map_err(|e| CalculatorError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ServiceConfig) -> CalculatorResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Applies `TAX_API_URL` and `LISTEN_ADDR` from the process environment.
    pub fn with_env_overrides(self) -> CalculatorResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> CalculatorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_of = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(base_url) = value_of(TAX_API_URL_ENV) {
            self.config.bracket_api.base_url = base_url;
        }

        if let Some(listen_addr) = value_of(LISTEN_ADDR_ENV) {
            self.config.listen_addr =
                listen_addr
                    .parse::<SocketAddr>()
                    .map_err(|e| CalculatorError::InvalidConfig {
                        field: LISTEN_ADDR_ENV.to_string(),
                        message: format!("'{}' is not a socket address: {}", listen_addr, e),
                    })?;
        }

        self.config.validate()?;
        Ok(self)
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }
}
