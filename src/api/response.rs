//! Response types for the tax calculator API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::request::INCOME_OUT_OF_RANGE;
use crate::config::SupportedTaxYears;
use crate::error::CalculatorError;

/// Message returned when the request body cannot be bound.
pub const INVALID_PAYLOAD_MESSAGE: &str =
    "Invalid request payload. Make sure 'income' (number) and 'tax_year' (integer) are provided.";

/// Message returned when income is not positive.
pub const INVALID_INCOME_MESSAGE: &str = "Income must be a positive number greater than 0.";

/// Message returned when income is too large to represent.
pub const INCOME_OUT_OF_RANGE_MESSAGE: &str =
    "Income exceeds the largest supported amount (79228162514264337593543950335).";

/// Message returned when the bracket service fails.
pub const BRACKET_SOURCE_MESSAGE: &str =
    "Failed to fetch tax brackets from external service. Please try again.";

/// Message returned for unexpected server-side failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an invalid payload error response.
    pub fn invalid_payload(details: impl Into<String>) -> Self {
        Self::with_details("INVALID_PAYLOAD", INVALID_PAYLOAD_MESSAGE, details)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 500 response that reveals nothing about the failure.
    pub fn internal() -> Self {
        ApiErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::new("INTERNAL_ERROR", INTERNAL_ERROR_MESSAGE),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let error = match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::new(
                "MISSING_CONTENT_TYPE",
                "Content-Type must be application/json",
            ),
            JsonRejection::JsonDataError(err) if err.body_text().contains(INCOME_OUT_OF_RANGE) => {
                ApiError::with_details("INVALID_INCOME", INCOME_OUT_OF_RANGE_MESSAGE, err.body_text())
            }
            other => ApiError::invalid_payload(other.body_text()),
        };

        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl From<CalculatorError> for ApiErrorResponse {
    fn from(error: CalculatorError) -> Self {
        match error {
            CalculatorError::ConfigNotFound { .. }
            | CalculatorError::ConfigParseError { .. }
            | CalculatorError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    error.to_string(),
                ),
            },
            CalculatorError::InvalidIncome { income } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INCOME",
                    INVALID_INCOME_MESSAGE,
                    format!("Received income {}", income),
                ),
            },
            CalculatorError::UnsupportedTaxYear { year, first, last } => {
                let years = SupportedTaxYears { first, last }.describe();
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::with_details(
                        "UNSUPPORTED_TAX_YEAR",
                        format!("Tax year must be one of: {}.", years),
                        format!("Received tax year {}", year),
                    ),
                }
            }
            // Upstream URLs and bodies stay in the logs.
            CalculatorError::BracketSourceUnavailable { .. }
            | CalculatorError::BracketSourceStatus { .. }
            | CalculatorError::BracketSourceDecode { .. } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::new("BRACKET_SOURCE_ERROR", BRACKET_SOURCE_MESSAGE),
            },
            CalculatorError::Server { .. } => ApiErrorResponse::internal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_income_maps_to_bad_request() {
        let response: ApiErrorResponse = CalculatorError::InvalidIncome { income: dec!(-1000) }.into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_INCOME");
        assert_eq!(response.error.message, INVALID_INCOME_MESSAGE);
    }

    #[test]
    fn test_unsupported_year_lists_supported_years() {
        let response: ApiErrorResponse = CalculatorError::UnsupportedTaxYear {
            year: 2025,
            first: 2019,
            last: 2022,
        }
        .into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "UNSUPPORTED_TAX_YEAR");
        assert_eq!(
            response.error.message,
            "Tax year must be one of: 2019, 2020, 2021, 2022."
        );
    }

    #[test]
    fn test_bracket_source_failure_maps_to_bad_gateway() {
        let response: ApiErrorResponse = CalculatorError::BracketSourceStatus {
            status: 500,
            body: "boom".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
        assert_eq!(response.error.code, "BRACKET_SOURCE_ERROR");
        assert_eq!(response.error.message, BRACKET_SOURCE_MESSAGE);
        assert_eq!(response.error.details, None);
    }

    #[test]
    fn test_unreachable_source_hides_upstream_url() {
        let response: ApiErrorResponse = CalculatorError::BracketSourceUnavailable {
            url: "http://10.0.0.7:5001/tax-calculator/tax-year/2022".to_string(),
            message: "connection refused".to_string(),
        }
        .into();

        let json = serde_json::to_string(&response.error).unwrap();
        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
        assert!(!json.contains("10.0.0.7"));
        assert!(!json.contains("connection refused"));
    }

    #[test]
    fn test_server_error_maps_to_internal_error() {
        let response: ApiErrorResponse = CalculatorError::Server {
            message: "accept failed".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "INTERNAL_ERROR");
        assert_eq!(response.error.details, None);
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let response: ApiErrorResponse = CalculatorError::ConfigNotFound {
            path: "/missing".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }
}
