//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/catalog/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use catalog_api_rs::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "CATALOG_CONFIG";

/// Keys accepted by `config set`.
const VALID_KEYS: &str = "server_url, output.color, client.timeout_secs";

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Server origin, e.g. `http://localhost:5000`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// HTTP client settings.
    #[serde(default)]
    pub client: ClientConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server_url: None,
            output: OutputConfig::default(),
            client: ClientConfig::default(),
        }
    }
}

impl Config {
    /// Resolves the server URL: flag or env first, then the file, then the
    /// built-in default.
    pub fn resolve_server_url(&self, flag: Option<&str>) -> String {
        flag.or(self.server_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.client.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// HTTP client configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Request timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/catalog/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("catalog"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("catalog"))
        .ok_or_else(|| {
            CommandError::Config("Could not determine config directory".to_string())
        })
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    Ok(get_config_dir()?.join("config.toml"))
}

/// Loads the configuration from disk.
///
/// A missing file yields the defaults.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    Ok(migrate_config(config))
}

/// Brings an older config up to the current schema version.
fn migrate_config(mut config: Config) -> Config {
    config.version = CONFIG_VERSION;
    config
}

/// Saves the configuration to disk, creating the directory if needed.
fn save_config(config: &Config) -> Result<PathBuf> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(path)
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        println!("server_url: {}", config.resolve_server_url(None));
        println!("\n[output]");
        if let Some(color) = config.output.color {
            println!("  color: {}", color);
        }
        println!("\n[client]");
        println!("  timeout_secs: {}", config.timeout().as_secs());
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies one `key = value` assignment to `config`.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "server_url" => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(CommandError::Config(format!(
                    "Invalid server_url '{}'. Expected an http:// or https:// URL",
                    value
                )));
            }
            config.server_url = Some(value.trim_end_matches('/').to_string());
        }
        "output.color" => {
            config.output.color = Some(parse_bool(value)?);
        }
        "client.timeout_secs" => {
            let secs: u64 = value.parse().ok().filter(|s| *s > 0).ok_or_else(|| {
                CommandError::Config(format!(
                    "Invalid timeout_secs '{}'. Expected a positive number of seconds",
                    value
                ))
            })?;
            config.client.timeout_secs = Some(secs);
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: {}",
                key, VALID_KEYS
            )));
        }
    }
    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    apply_setting(&mut config, &opts.key, &opts.value)?;
    let path = save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}
