//! Configuration types for the tax calculator service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file.

use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{CalculatorError, CalculatorResult};

/// Connection settings for the upstream bracket service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BracketApiConfig {
    /// Base URL of the bracket service (e.g., "http://localhost:5001").
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    7
}

impl BracketApiConfig {
    /// Returns the request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// The inclusive range of tax years the service accepts.
///
/// # Example
///
/// ```
/// use tax_calculator::config::SupportedTaxYears;
///
/// let years = SupportedTaxYears { first: 2019, last: 2022 };
/// assert!(years.contains(2021));
/// assert!(!years.contains(2025));
/// assert_eq!(years.describe(), "2019, 2020, 2021, 2022");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SupportedTaxYears {
    /// First supported year.
    pub first: i32,
    /// Last supported year.
    pub last: i32,
}

impl SupportedTaxYears {
    /// Returns true if `year` is inside the range.
    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    /// Checks `year` against the range.
    pub fn check(&self, year: i32) -> CalculatorResult<()> {
        if self.contains(year) {
            Ok(())
        } else {
            Err(CalculatorError::UnsupportedTaxYear {
                year,
                first: self.first,
                last: self.last,
            })
        }
    }

    /// Lists the supported years, comma separated.
    pub fn describe(&self) -> String {
        (self.first..=self.last)
            .map(|year| year.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for SupportedTaxYears {
    fn default() -> Self {
        Self {
            first: 2019,
            last: 2022,
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// Upstream bracket service settings.
    pub bracket_api: BracketApiConfig,
    /// Tax years accepted by the `/calculate-tax` endpoint.
    #[serde(default)]
    pub supported_tax_years: SupportedTaxYears,
}

impl ServiceConfig {
    /// Checks the values serde cannot check on its own.
    pub fn validate(&self) -> CalculatorResult<()> {
        if self.bracket_api.base_url.trim().is_empty() {
            return Err(CalculatorError::InvalidConfig {
                field: "bracket_api.base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if self.bracket_api.timeout_secs == 0 {
            return Err(CalculatorError::InvalidConfig {
                field: "bracket_api.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.supported_tax_years.first > self.supported_tax_years.last {
            return Err(CalculatorError::InvalidConfig {
                field: "supported_tax_years".to_string(),
                message: format!(
                    "first ({}) is after last ({})",
                    self.supported_tax_years.first, self.supported_tax_years.last
                ),
            });
        }

        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            bracket_api: BracketApiConfig {
                base_url: "http://localhost:5001".to_string(),
                timeout_secs: default_timeout_secs(),
            },
            supported_tax_years: SupportedTaxYears::default(),
        }
    }
}
