//! Tax calculator service entry point.

use std::process::ExitCode;

use tax_calculator::api::{AppState, create_router, serve};
use tax_calculator::client::HttpBracketSource;
use tax_calculator::config::ConfigLoader;
use tax_calculator::error::CalculatorError;
use tax_calculator::logging::init_logging;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Tax calculator exited with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CalculatorError> {
    let config = ConfigLoader::from_env()?.into_config();

    let bracket_source = HttpBracketSource::from_config(&config.bracket_api)?;
    info!(
        bracket_api = %bracket_source.base_url(),
        timeout_secs = config.bracket_api.timeout_secs,
        first_year = config.supported_tax_years.first,
        last_year = config.supported_tax_years.last,
        "Configuration loaded"
    );

    let state = AppState::new(bracket_source, config.supported_tax_years);
    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .map_err(|e| CalculatorError::InvalidConfig {
            field: "listen_addr".to_string(),
            message: format!("cannot bind {}: {}", config.listen_addr, e),
        })?;

    serve(listener, app, shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
