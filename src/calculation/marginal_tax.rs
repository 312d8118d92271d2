//! Marginal tax calculation.
//!
//! This module applies a progressive bracket schedule to an income, taxing
//! each slice of income at the rate of the bracket it falls in.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{TaxBandResult, TaxBracket, TaxCalculationResult};

/// Calculates marginal tax on `income` across `brackets`.
///
/// Brackets are walked once in the order given, so they must already be
/// ascending by `min`. A bracket is active only when `income` is strictly
/// greater than its floor; inactive brackets contribute nothing and are left
/// out of the breakdown. The top bracket (no `max`, or a `max` of zero)
/// absorbs everything above its floor.
///
/// The effective rate is `total_tax / income`, or zero when `income` is not
/// positive.
///
/// Arithmetic saturates at the bounds of [`Decimal`], so the function never
/// panics. Schedules that push a band or the total past those bounds (a
/// negative floor under a huge income, a rate above one) yield clamped
/// figures instead.
///
/// # Arguments
///
/// * `income` - The income to tax
/// * `brackets` - The bracket schedule, ascending by `min`
///
/// # Examples
///
/// ```
/// use tax_calculator::calculation::calculate_tax;
/// use tax_calculator::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let brackets = vec![
///     TaxBracket::bounded(Decimal::ZERO, Decimal::from(50_000), Decimal::new(10, 2)),
///     TaxBracket::bounded(Decimal::from(50_000), Decimal::from(100_000), Decimal::new(20, 2)),
///     TaxBracket::unbounded(Decimal::from(100_000), Decimal::new(30, 2)),
/// ];
///
/// let result = calculate_tax(Decimal::from(150_000), &brackets);
/// assert_eq!(result.total_tax, Decimal::from(30_000));
/// assert_eq!(result.effective_tax_rate, Decimal::new(20, 2));
/// assert_eq!(result.breakdown.len(), 3);
/// ```
///
/// An income that reaches no bracket owes nothing:
///
/// ```
/// use tax_calculator::calculation::calculate_tax;
/// use tax_calculator::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let brackets = vec![TaxBracket::unbounded(Decimal::ZERO, Decimal::new(10, 2))];
///
/// let result = calculate_tax(Decimal::ZERO, &brackets);
/// assert_eq!(result.total_tax, Decimal::ZERO);
/// assert!(result.breakdown.is_empty());
/// ```
pub fn calculate_tax(income: Decimal, brackets: &[TaxBracket]) -> TaxCalculationResult {
    let mut total_tax = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for bracket in brackets {
        if income <= bracket.min {
            continue;
        }

        let upper = bracket.upper_bound().unwrap_or(income);
        let taxable = income.min(upper).saturating_sub(bracket.min);
        let tax_paid = taxable.saturating_mul(bracket.rate);

        debug!(
            bracket_min = %bracket.min,
            bracket_max = ?bracket.upper_bound(),
            rate = %bracket.rate,
            taxable = %taxable,
            tax_paid = %tax_paid,
            "Calculated tax for bracket"
        );

        total_tax = total_tax.saturating_add(tax_paid);
        breakdown.push(TaxBandResult {
            min: bracket.min,
            max: bracket.upper_bound(),
            rate: bracket.rate,
            tax_paid,
        });
    }

    let effective_tax_rate = if income > Decimal::ZERO {
        total_tax.checked_div(income).unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    };

    TaxCalculationResult {
        total_tax,
        effective_tax_rate,
        breakdown,
    }
}
