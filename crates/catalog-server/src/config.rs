//! Server configuration.
//!
//! Every option can be given as a flag or through the environment, so the
//! server runs unchanged under a process manager that only sets `PORT`.

use std::net::SocketAddr;
use std::path::PathBuf;

use catalog_store_rs::{seed, Catalog, SeedError};
use clap::{Parser, ValueEnum};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default listen address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// catalog-server - serve the course catalog over HTTP
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "catalog-server")]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "CATALOG_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// JSON file with the initial items (default: built-in catalog)
    #[arg(long, env = "CATALOG_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per line
    Json,
}

/// Errors that can occur while preparing the server.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Host and port do not form a socket address.
    #[error("invalid listen address '{0}'")]
    InvalidAddress(String),

    /// The seed file could not be loaded.
    #[error(transparent)]
    Seed(#[from] SeedError),
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_file: None,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ConfigError::InvalidAddress(addr))
    }

    /// Builds the initial catalog from the seed file or the built-in data.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.seed_file {
            Some(path) => Ok(Catalog::from_items(seed::load_seed_file(path)?)),
            None => Ok(Catalog::seeded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["catalog-server"]).unwrap();
        if std::env::var("PORT").is_err() {
            assert_eq!(config.port, DEFAULT_PORT);
        }
        assert_eq!(config.log_format, LogFormat::Pretty);
        if std::env::var("CATALOG_SEED_FILE").is_err() {
            assert!(config.seed_file.is_none());
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "catalog-server",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_host() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.bind_addr(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_load_builtin_catalog() {
        let catalog = ServerConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn test_load_catalog_from_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let seeded = Catalog::seeded();
        let items = &seeded.items()[..3];
        file.write_all(serde_json::to_string(items).unwrap().as_bytes())
            .unwrap();

        let config = ServerConfig {
            seed_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_load_catalog_missing_seed_file() {
        let config = ServerConfig {
            seed_file: Some(PathBuf::from("/nonexistent/seed.json")),
            ..Default::default()
        };
        assert!(matches!(config.load_catalog(), Err(ConfigError::Seed(_))));
    }
}
