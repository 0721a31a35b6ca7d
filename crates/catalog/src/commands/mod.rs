//! Command implementations for the catalog CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod add;
pub mod completions;
pub mod config;
pub mod facets;
pub mod health;
pub mod list;
pub mod show;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// API error.
    #[error("API error: {0}")]
    Api(#[from] catalog_api_rs::error::Error),

    /// The requested item does not exist.
    #[error("item not found: {id}")]
    NotFound { id: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && std::env::var_os("NO_COLOR").is_none(),
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }

    /// Applies the output preferences from the config file.
    ///
    /// `--no-color` and `NO_COLOR` always win over the file.
    pub fn with_config(mut self, config: &Config) -> Self {
        if config.output.color == Some(false) {
            self.use_colors = false;
        }
        self
    }
}
