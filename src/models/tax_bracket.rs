//! Tax bracket models.
//!
//! This module defines the [`TaxBracket`] type supplied by the bracket
//! service and the [`TaxBracketsResponse`] envelope it arrives in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A contiguous income range taxed at a single marginal rate.
///
/// A `max` of `None` marks the top, unbounded bracket. The bracket service
/// also uses a `max` of zero for the same purpose, so [`TaxBracket::upper_bound`]
/// treats both alike.
///
/// # Example
///
/// ```
/// use tax_calculator::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let top = TaxBracket::unbounded(Decimal::from(100_000), Decimal::new(30, 2));
/// assert!(top.is_unbounded());
/// assert_eq!(top.upper_bound(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The income floor of the bracket (exclusive for activation).
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub min: Decimal,
    /// The income ceiling of the bracket, absent for the top bracket.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub max: Option<Decimal>,
    /// The marginal rate as a fraction (0.20 for 20%).
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket with a finite ceiling.
    pub fn bounded(min: Decimal, max: Decimal, rate: Decimal) -> Self {
        Self {
            min,
            max: Some(max),
            rate,
        }
    }

    /// Creates the top bracket, which has no ceiling.
    pub fn unbounded(min: Decimal, rate: Decimal) -> Self {
        Self {
            min,
            max: None,
            rate,
        }
    }

    /// Returns the finite ceiling of this bracket, if it has one.
    ///
    /// A ceiling of exactly zero is the bracket service's "no upper bound"
    /// marker and is reported as `None`.
    pub fn upper_bound(&self) -> Option<Decimal> {
        self.max.filter(|max| !max.is_zero())
    }

    /// Returns true if this is the open-ended top bracket.
    pub fn is_unbounded(&self) -> bool {
        self.upper_bound().is_none()
    }
}

/// The payload returned by the bracket service for a tax year.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxBracketsResponse {
    /// The brackets, ascending by `min`.
    pub tax_brackets: Vec<TaxBracket>,
}
