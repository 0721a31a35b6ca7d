use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod fallback;
mod logging;
mod output;

use catalog_api_rs::client::CatalogClient;
use cli::Cli;
use commands::config::{load_config, Config};
use commands::{CommandContext, CommandError};
use dispatch::{CatalogCommand, CatalogDispatch, LocalCommand, LocalDispatch};
use fallback::FallbackCatalog;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(text) => eprintln!("{text}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(error_exit_code(&e))
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    // Local commands first (config, completions, help)
    if let Some(dispatch) = LocalDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx);
    }

    let config = load_config()?;
    let ctx = ctx.with_config(&config);
    let catalog = build_catalog(cli, &config)?;

    match CatalogDispatch::from_cli(cli) {
        Some(dispatch) => dispatch.execute(&ctx, &catalog).await,
        None => Ok(()),
    }
}

/// Builds the catalog handle from the resolved server URL and timeout.
fn build_catalog(cli: &Cli, config: &Config) -> commands::Result<FallbackCatalog> {
    let server_url = config.resolve_server_url(cli.server_url.as_deref());
    tracing::debug!(server_url = %server_url, offline = cli.offline, "using catalog server");

    let client = CatalogClient::builder()
        .base_url(server_url)
        .timeout(config.timeout())
        .build()?;

    Ok(FallbackCatalog::new(client).offline(cli.offline))
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Api(err) => match err.as_api_error() {
            Some(catalog_api_rs::error::ApiError::Validation { .. }) => "VALIDATION_ERROR",
            Some(catalog_api_rs::error::ApiError::Network { .. }) => "NETWORK_ERROR",
            _ => "API_ERROR",
        },
        CommandError::NotFound { .. } => "NOT_FOUND",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> u8 {
    match e {
        CommandError::Api(err) => u8::try_from(err.exit_code()).unwrap_or(1),
        CommandError::NotFound { .. } => 2,
        CommandError::Config(_) => 5,
        CommandError::Io(_) => 3,
        CommandError::Json(_) => 1,
    }
}
