//! HTTP client for the upstream bracket service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{error, info};

use crate::config::BracketApiConfig;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{TaxBracket, TaxBracketsResponse};

use super::source::BracketSource;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(7);

/// Fetches bracket schedules from `GET {base_url}/tax-calculator/tax-year/{year}`.
///
/// The service answers `{"tax_brackets": [{"min", "max"?, "rate"}, ...]}`.
/// Only a 200 response is accepted.
#[derive(Debug, Clone)]
pub struct HttpBracketSource {
    base_url: String,
    client: Client,
}

impl HttpBracketSource {
    /// Creates a client for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> CalculatorResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CalculatorError::InvalidConfig {
                field: "bracket_api".to_string(),
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { base_url, client })
    }

    /// Creates a client from the `bracket_api` configuration section.
    pub fn from_config(config: &BracketApiConfig) -> CalculatorResult<Self> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the URL for a tax year's brackets.
    pub fn brackets_url(&self, tax_year: i32) -> String {
        format!("{}/tax-calculator/tax-year/{}", self.base_url, tax_year)
    }
}

#[async_trait]
impl BracketSource for HttpBracketSource {
    async fn fetch_brackets(&self, tax_year: i32) -> CalculatorResult<Vec<TaxBracket>> {
        let url = self.brackets_url(tax_year);
        info!(year = tax_year, url = %url, "Calling tax API to fetch brackets");

        let resp = self.client.get(&url).send().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to reach tax API");
            CalculatorError::BracketSourceUnavailable {
                url: url.clone(),
                message: e.to_string(),
            }
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            error!(
                url = %url,
                status = status.as_u16(),
                body = %body,
                "Received non-200 response from tax API"
            );
            return Err(CalculatorError::BracketSourceStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to read tax API response");
            CalculatorError::BracketSourceUnavailable {
                url: url.clone(),
                message: e.to_string(),
            }
        })?;

        let payload: TaxBracketsResponse = serde_json::from_slice(&bytes).map_err(|e| {
            error!(url = %url, error = %e, "Failed to decode tax API response");
            CalculatorError::BracketSourceDecode {
                message: e.to_string(),
            }
        })?;

        info!(
            year = tax_year,
            brackets_count = payload.tax_brackets.len(),
            "Successfully fetched tax brackets"
        );
        Ok(payload.tax_brackets)
    }
}
