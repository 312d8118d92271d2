//! Progressive income tax calculator.
//!
//! This crate computes marginal income tax for an income and tax year. Bracket
//! schedules come from an external bracket service; the calculation itself is
//! a pure accumulator over those brackets, exposed over HTTP by the [`api`]
//! module.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
