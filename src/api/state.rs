//! Application state for the tax calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::client::BracketSource;
use crate::config::SupportedTaxYears;

/// Shared application state.
///
/// Holds the injected bracket source and the accepted tax years. Cloning is
/// cheap; the source sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Where bracket schedules come from.
    bracket_source: Arc<dyn BracketSource>,
    /// Tax years the endpoint accepts.
    tax_years: SupportedTaxYears,
}

impl AppState {
    /// Creates a new application state around `bracket_source`.
    pub fn new<S>(bracket_source: S, tax_years: SupportedTaxYears) -> Self
    where
        S: BracketSource + 'static,
    {
        Self::from_shared(Arc::new(bracket_source), tax_years)
    }

    /// Creates a new application state around an already shared source.
    pub fn from_shared(bracket_source: Arc<dyn BracketSource>, tax_years: SupportedTaxYears) -> Self {
        Self {
            bracket_source,
            tax_years,
        }
    }

    /// Returns the bracket source.
    pub fn bracket_source(&self) -> &dyn BracketSource {
        self.bracket_source.as_ref()
    }

    /// Returns the supported tax years.
    pub fn tax_years(&self) -> &SupportedTaxYears {
        &self.tax_years
    }
}
