//! Core data models for the tax calculator.
//!
//! This module contains the bracket definitions consumed by the calculator
//! and the result types it produces.

mod calculation_result;
mod tax_bracket;

pub use calculation_result::{TaxBandResult, TaxCalculationResult};
pub use tax_bracket::{TaxBracket, TaxBracketsResponse};
