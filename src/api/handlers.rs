//! HTTP request handlers for the tax calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::calculate_tax;

use super::middleware::{log_requests, recover_from_panic};
use super::request::TaxCalculationRequest;
use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// A panic inside a handler is answered with a 500 and still logged by the
/// request logger.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate-tax", post(calculate_tax_handler))
        .route("/health", get(health_handler))
        .layer(CatchPanicLayer::custom(recover_from_panic))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// Handler for POST /calculate-tax endpoint.
///
/// Validates the request, fetches the brackets for the requested year and
/// returns the marginal tax calculation.
async fn calculate_tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxCalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Failed to parse request body"
            );
            return ApiErrorResponse::from(rejection).into_response();
        }
    };

    if let Err(err) = request.validate(state.tax_years()) {
        warn!(
            correlation_id = %correlation_id,
            income = %request.income,
            tax_year = request.tax_year,
            error = %err,
            "Rejected tax calculation request"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    info!(
        correlation_id = %correlation_id,
        income = %request.income,
        tax_year = request.tax_year,
        "Processing tax calculation request"
    );

    let brackets = match state
        .bracket_source()
        .fetch_brackets(request.tax_year)
        .await
    {
        Ok(brackets) => brackets,
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                tax_year = request.tax_year,
                error = %err,
                "Failed to fetch tax brackets"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let result = calculate_tax(request.income, &brackets);

    info!(
        correlation_id = %correlation_id,
        total_tax = %result.total_tax,
        effective_tax_rate = %result.effective_tax_rate,
        bands = result.breakdown.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Successfully calculated tax"
    );

    (StatusCode::OK, Json(result)).into_response()
}

/// Handler for GET /health endpoint.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
