//! The bracket source abstraction.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::TaxBracket;

/// Supplies the bracket schedule for a tax year.
///
/// Implementations return brackets ascending by `min`. Any failure is a
/// dependency failure; callers must not fall back to partial data.
#[async_trait]
pub trait BracketSource: Send + Sync {
    /// Fetches the brackets for `tax_year`.
    async fn fetch_brackets(&self, tax_year: i32) -> CalculatorResult<Vec<TaxBracket>>;
}

/// A bracket source backed by a fixed map of year to schedule.
///
/// # Example
///
/// ```
/// use tax_calculator::client::{BracketSource, InMemoryBracketSource};
/// use tax_calculator::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let source = InMemoryBracketSource::new()
///     .with_year(2022, vec![TaxBracket::unbounded(Decimal::ZERO, Decimal::new(10, 2))]);
///
/// # tokio_test_block(async {
/// let brackets = source.fetch_brackets(2022).await.unwrap();
/// assert_eq!(brackets.len(), 1);
/// assert!(source.fetch_brackets(2019).await.is_err());
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryBracketSource {
    years: HashMap<i32, Vec<TaxBracket>>,
}

impl InMemoryBracketSource {
    /// Creates an empty source; every year is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the schedule for `tax_year`.
    pub fn with_year(mut self, tax_year: i32, brackets: Vec<TaxBracket>) -> Self {
        self.years.insert(tax_year, brackets);
        self
    }
}

#[async_trait]
impl BracketSource for InMemoryBracketSource {
    async fn fetch_brackets(&self, tax_year: i32) -> CalculatorResult<Vec<TaxBracket>> {
        self.years
            .get(&tax_year)
            .cloned()
            .ok_or_else(|| CalculatorError::BracketSourceStatus {
                status: 404,
                body: format!("no brackets for tax year {}", tax_year),
            })
    }
}
