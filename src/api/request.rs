//! Request types for the tax calculator API.
//!
//! This module defines the JSON request structure for the `/calculate-tax`
//! endpoint and the checks it must pass before any brackets are fetched.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::config::SupportedTaxYears;
use crate::error::{CalculatorError, CalculatorResult};

/// Marker carried by the deserialization error for an income that is a valid
/// number but lies outside the range of [`Decimal`].
pub(crate) const INCOME_OUT_OF_RANGE: &str = "income is outside the representable range";

/// Request body for the `/calculate-tax` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationRequest {
    /// The income to tax. Accepted as a JSON number or string.
    ///
    /// Magnitudes beyond 79228162514264337593543950335 are rejected.
    #[serde(deserialize_with = "deserialize_income")]
    pub income: Decimal,
    /// The tax year whose brackets apply.
    pub tax_year: i32,
}

impl TaxCalculationRequest {
    /// Checks that income is positive and the year is supported.
    ///
    /// Income is checked first, so a request failing both reports the income.
    pub fn validate(&self, tax_years: &SupportedTaxYears) -> CalculatorResult<()> {
        if self.income <= Decimal::ZERO {
            return Err(CalculatorError::InvalidIncome {
                income: self.income,
            });
        }

        tax_years.check(self.tax_year)
    }
}

fn deserialize_income<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    struct IncomeVisitor;

    impl<'de> Visitor<'de> for IncomeVisitor {
        type Value = Decimal;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a decimal income as a number or string")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
            if !value.is_finite() {
                return Err(de::Error::invalid_value(de::Unexpected::Float(value), &self));
            }
            Decimal::from_str(&value.to_string()).map_err(|_| de::Error::custom(INCOME_OUT_OF_RANGE))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
            let value = value.trim();
            if let Ok(income) = Decimal::from_str(value).or_else(|_| Decimal::from_scientific(value)) {
                return Ok(income);
            }
            match value.parse::<f64>() {
                Ok(number) if number.is_finite() => Err(de::Error::custom(INCOME_OUT_OF_RANGE)),
                _ => Err(de::Error::invalid_value(de::Unexpected::Str(value), &self)),
            }
        }
    }

    deserializer.deserialize_any(IncomeVisitor)
}
