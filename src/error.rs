//! Error types for the tax calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while serving a tax calculation.
//! The bracket accumulator itself never fails; every variant here belongs to
//! configuration, request validation, the bracket source or the server.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the tax calculator.
///
/// # Example
///
/// ```
/// use tax_calculator::error::CalculatorError;
///
/// let error = CalculatorError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Income was zero or negative.
    #[error("Income must be a positive number greater than 0, got {income}")]
    InvalidIncome {
        /// The rejected income.
        income: Decimal,
    },

    /// The requested tax year is outside the supported range.
    #[error("Unsupported tax year {year}: supported years are {first} to {last}")]
    UnsupportedTaxYear {
        /// The requested year.
        year: i32,
        /// First supported year (inclusive).
        first: i32,
        /// Last supported year (inclusive).
        last: i32,
    },

    /// The bracket service could not be reached.
    #[error("Failed to reach bracket service at {url}: {message}")]
    BracketSourceUnavailable {
        /// The URL that was requested.
        url: String,
        /// The transport error.
        message: String,
    },

    /// The bracket service answered with a non-success status.
    #[error("Bracket service returned status {status}: {body}")]
    BracketSourceStatus {
        /// The HTTP status code.
        status: u16,
        /// The response body, as text.
        body: String,
    },

    /// The bracket service response body could not be decoded.
    #[error("Failed to decode bracket service response: {message}")]
    BracketSourceDecode {
        /// The decode error.
        message: String,
    },

    /// The HTTP server failed while accepting or serving connections.
    #[error("Server error: {message}")]
    Server {
        /// The underlying I/O error.
        message: String,
    },
}

impl CalculatorError {
    /// Returns true if this error came from the bracket source dependency.
    pub fn is_dependency_failure(&self) -> bool {
        matches!(
            self,
            CalculatorError::BracketSourceUnavailable { .. }
                | CalculatorError::BracketSourceStatus { .. }
                | CalculatorError::BracketSourceDecode { .. }
        )
    }
}

/// A type alias for Results that return CalculatorError.
pub type CalculatorResult<T> = Result<T, CalculatorError>;
