//! Configuration loading and management for the tax calculator.
//!
//! This module loads the service configuration from YAML: where to listen,
//! where the bracket service lives, and which tax years are accepted.
//!
//! # Example
//!
//! ```no_run
//! use tax_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Listening on {}", config.config().listen_addr);
//! ```

mod loader;
mod types;

pub use loader::{
    CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH, LISTEN_ADDR_ENV, TAX_API_URL_ENV,
};
pub use types::{BracketApiConfig, ServiceConfig, SupportedTaxYears};
