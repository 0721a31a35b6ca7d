//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the catalog CLI.

use clap::{Parser, Subcommand, ValueEnum};

/// catalog - browse and extend the course catalog
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Server origin (default: from config, then http://localhost:5000)
    #[arg(long, global = true, env = "CATALOG_SERVER_URL")]
    pub server_url: Option<String>,

    /// Use the built-in catalog without contacting the server
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items, optionally filtered
    #[command(alias = "l")]
    List {
        /// Free-text search over name, description, tags and instructor
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,

        /// Exact level (case-insensitive)
        #[arg(short = 'L', long)]
        level: Option<String>,

        /// Instructor name fragment
        #[arg(short, long)]
        instructor: Option<String>,

        /// Show at most this many items
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show item details
    #[command(alias = "s")]
    Show {
        /// Item ID
        item_id: String,
    },

    /// Add a new item
    #[command(alias = "a")]
    Add {
        /// Item name
        #[arg(long)]
        name: String,

        /// Price (non-negative)
        #[arg(long)]
        price: f64,

        /// Instructor or organization
        #[arg(long)]
        instructor: String,

        /// Category
        #[arg(long)]
        category: String,

        /// Description
        #[arg(long)]
        description: String,

        /// Level (e.g. Beginner)
        #[arg(long)]
        level: String,

        /// Duration (e.g. "8 weeks")
        #[arg(long)]
        duration: String,

        /// Add tag (repeatable)
        #[arg(short, long = "tag", action = clap::ArgAction::Append)]
        tags: Vec<String>,

        /// Mark the item as not available
        #[arg(long)]
        unavailable: bool,
    },

    /// List the distinct categories and levels
    Facets,

    /// Check whether the server is reachable
    Health,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
