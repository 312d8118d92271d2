//! Request logging and panic recovery middleware.

use std::any::Any;
use std::time::Instant;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use super::response::ApiErrorResponse;

/// Logs method, path, status and duration for every request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_us = start.elapsed().as_micros() as u64,
        "Request completed"
    );
    response
}

/// Turns a panic raised while handling a request into a 500 response.
pub fn recover_from_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };

    error!(panic = detail, "Request handler panicked");
    ApiErrorResponse::internal().into_response()
}
