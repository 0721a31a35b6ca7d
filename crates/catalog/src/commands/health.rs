//! Health command implementation.

use owo_colors::OwoColorize;

use super::{CommandContext, Result};
use crate::fallback::FallbackCatalog;

/// Executes the health command.
///
/// # Errors
///
/// Returns an API error if the server cannot be reached or reports an error.
pub async fn execute(ctx: &CommandContext, catalog: &FallbackCatalog) -> Result<()> {
    let status = catalog.health().await?;

    if ctx.json_output {
        let output = serde_json::json!({
            "server": catalog.client().base_url(),
            "status": status.status,
            "message": status.message,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        let label = if status.is_ok() { "ok" } else { status.status.as_str() };
        let label = if ctx.use_colors && status.is_ok() {
            label.green().to_string()
        } else {
            label.to_string()
        };
        println!(
            "{} {} ({})",
            catalog.client().base_url(),
            label,
            status.message
        );
    }

    Ok(())
}
