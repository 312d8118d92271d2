//! HTTP API module for the tax calculator.
//!
//! This module provides the REST API endpoints: `POST /calculate-tax` for
//! marginal tax calculations and `GET /health` for liveness checks.

mod handlers;
mod middleware;
mod request;
mod response;
mod server;
mod state;

pub use handlers::create_router;
pub use request::TaxCalculationRequest;
pub use response::{
    ApiError, ApiErrorResponse, BRACKET_SOURCE_MESSAGE, INCOME_OUT_OF_RANGE_MESSAGE,
    INTERNAL_ERROR_MESSAGE, INVALID_INCOME_MESSAGE, INVALID_PAYLOAD_MESSAGE,
};
pub use server::serve;
pub use state::AppState;
