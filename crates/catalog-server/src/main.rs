use std::process::ExitCode;

use catalog_server_rs::{logging, serve, AppState, ServerConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::parse();

    if let Err(e) = logging::init_tracing(config.log_format) {
        eprintln!("Error: failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.bind_addr()?;
    let catalog = config.load_catalog()?;
    tracing::info!(items = catalog.len(), seed_file = ?config.seed_file, "catalog loaded");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "server listening");

    serve(listener, AppState::new(catalog), shutdown_signal()).await?;
    tracing::info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
