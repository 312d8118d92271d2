//! Serving the router on a bound listener.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::error::{CalculatorError, CalculatorResult};

/// Serves `router` on `listener` until `shutdown` resolves.
///
/// Returns `Ok(())` after a graceful shutdown. An I/O failure from the
/// server is returned as [`CalculatorError::Server`].
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> CalculatorResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(listen_addr = %addr, "Server starting");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| {
            error!(error = %e, "Server error");
            CalculatorError::Server {
                message: e.to_string(),
            }
        })?;

    info!("Server shutdown complete");
    Ok(())
}
