//! Calculation logic for the tax calculator.
//!
//! This module contains the marginal tax accumulator, which turns an income
//! and a bracket schedule into a total tax, an effective rate and a
//! per-bracket breakdown. It performs no I/O and never fails.

mod marginal_tax;

pub use marginal_tax::calculate_tax;
