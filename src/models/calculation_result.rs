//! Calculation result models for the tax calculator.
//!
//! This module contains the [`TaxCalculationResult`] type and the
//! per-bracket [`TaxBandResult`] entries that make up its breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The tax paid within one bracket that the income reached.
///
/// # Example
///
/// ```
/// use tax_calculator::models::TaxBandResult;
/// use rust_decimal::Decimal;
///
/// let band = TaxBandResult {
///     min: Decimal::ZERO,
///     max: Some(Decimal::from(50_000)),
///     rate: Decimal::new(10, 2),
///     tax_paid: Decimal::from(5_000),
/// };
/// assert_eq!(band.tax_paid, Decimal::from(5_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBandResult {
    /// The bracket floor.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub min: Decimal,
    /// The bracket ceiling, absent for the top bracket.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub max: Option<Decimal>,
    /// The marginal rate applied in this bracket.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub rate: Decimal,
    /// The tax owed on the slice of income inside this bracket.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub tax_paid: Decimal,
}

/// The complete result of a marginal tax calculation.
///
/// Serialized as `{total_tax, effective_tax_rate, tax_by_bracket}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    /// Sum of `tax_paid` across the breakdown.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_tax: Decimal,
    /// Total tax divided by income; zero when income is not positive.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub effective_tax_rate: Decimal,
    /// One entry per active bracket, in bracket order.
    #[serde(rename = "tax_by_bracket", default)]
    pub breakdown: Vec<TaxBandResult>,
}

impl TaxCalculationResult {
    /// The result for an income that reaches no bracket.
    pub fn zero() -> Self {
        Self {
            total_tax: Decimal::ZERO,
            effective_tax_rate: Decimal::ZERO,
            breakdown: Vec::new(),
        }
    }

    /// Returns the highest marginal rate among the bands the income reached.
    pub fn top_marginal_rate(&self) -> Option<Decimal> {
        self.breakdown.iter().map(|band| band.rate).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_sample_result() -> TaxCalculationResult {
        TaxCalculationResult {
            total_tax: dec!(10000),
            effective_tax_rate: dec!(0.125),
            breakdown: vec![
                TaxBandResult {
                    min: dec!(0),
                    max: Some(dec!(50000)),
                    rate: dec!(0.10),
                    tax_paid: dec!(5000),
                },
                TaxBandResult {
                    min: dec!(50000),
                    max: None,
                    rate: dec!(0.20),
                    tax_paid: dec!(5000),
                },
            ],
        }
    }

    #[test]
    fn test_serialization_uses_wire_field_names() {
        let json = serde_json::to_value(create_sample_result()).unwrap();

        assert_eq!(json["total_tax"], serde_json::json!(10000.0));
        assert_eq!(json["effective_tax_rate"], serde_json::json!(0.125));
        assert_eq!(json["tax_by_bracket"].as_array().unwrap().len(), 2);
        assert!(json.get("breakdown").is_none());
    }

    #[test]
    fn test_top_band_serializes_without_max() {
        let json = serde_json::to_value(create_sample_result()).unwrap();

        assert_eq!(json["tax_by_bracket"][0]["max"], serde_json::json!(50000.0));
        assert!(json["tax_by_bracket"][1].get("max").is_none());
    }

    #[test]
    fn test_zero_result_is_empty() {
        let result = TaxCalculationResult::zero();

        assert_eq!(result.total_tax, Decimal::ZERO);
        assert_eq!(result.effective_tax_rate, Decimal::ZERO);
        assert!(result.breakdown.is_empty());
        assert_eq!(result.top_marginal_rate(), None);
    }

    #[test]
    fn test_top_marginal_rate() {
        assert_eq!(create_sample_result().top_marginal_rate(), Some(dec!(0.20)));
    }
}
