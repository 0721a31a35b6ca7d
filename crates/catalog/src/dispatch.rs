//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands split into those that work purely locally (config, completions)
//! and those that talk to the catalog through a [`FallbackCatalog`].

use catalog_api_rs::models::ItemQuery;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::{self, CommandContext, CommandError, Result};
use crate::fallback::FallbackCatalog;

/// Trait for commands that never contact the server.
pub trait LocalCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that read or write the catalog.
#[allow(async_fn_in_trait)]
pub trait CatalogCommand {
    /// Execute the command against the given catalog.
    async fn execute(&self, ctx: &CommandContext, catalog: &FallbackCatalog) -> Result<()>;
}

/// Commands that don't need a catalog connection.
pub enum LocalDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a crate::cli::Shell),
    Help,
}

impl<'a> LocalDispatch<'a> {
    /// Try to create a local dispatch from the CLI command.
    /// Returns None if the command needs the catalog.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl LocalCommand for LocalDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("catalog - course catalog CLI");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that use the catalog.
pub enum CatalogDispatch<'a> {
    List(commands::list::ListOptions),
    Show { item_id: &'a str },
    Add(commands::add::AddOptions),
    Facets,
    Health,
}

impl<'a> CatalogDispatch<'a> {
    /// Create a catalog dispatch from the CLI command.
    /// Returns None for commands handled by [`LocalDispatch`].
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::List {
                search,
                category,
                level,
                instructor,
                limit,
            }) => Some(Self::List(commands::list::ListOptions {
                query: ItemQuery {
                    search: search.clone(),
                    category: category.clone(),
                    level: level.clone(),
                    instructor: instructor.clone(),
                },
                limit: *limit,
            })),
            Some(Commands::Show { item_id }) => Some(Self::Show { item_id }),
            Some(Commands::Add {
                name,
                price,
                instructor,
                category,
                description,
                level,
                duration,
                tags,
                unavailable,
            }) => Some(Self::Add(commands::add::AddOptions {
                name: name.clone(),
                price: *price,
                instructor: instructor.clone(),
                category: category.clone(),
                description: description.clone(),
                level: level.clone(),
                duration: duration.clone(),
                tags: tags.clone(),
                unavailable: *unavailable,
            })),
            Some(Commands::Facets) => Some(Self::Facets),
            Some(Commands::Health) => Some(Self::Health),
            // Already handled by LocalDispatch
            Some(Commands::Config { .. }) | Some(Commands::Completions { .. }) | None => None,
        }
    }
}

impl CatalogCommand for CatalogDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext, catalog: &FallbackCatalog) -> Result<()> {
        match self {
            Self::List(opts) => commands::list::execute(ctx, opts, catalog).await,
            Self::Show { item_id } => commands::show::execute(ctx, item_id, catalog).await,
            Self::Add(opts) => commands::add::execute(ctx, opts, catalog).await,
            Self::Facets => commands::facets::execute(ctx, catalog).await,
            Self::Health => commands::health::execute(ctx, catalog).await,
        }
    }
}
