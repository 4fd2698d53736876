//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Storage selection
//!
//! ```bash
//! # Relational backend (SQLite)
//! export DATABASE_URL="sqlite:data/links.db"
//! ```
//!
//! If `DATABASE_URL` is not set, the service falls back to a file-backed
//! JSON store so it still works without a database:
//!
//! ```bash
//! export LINKS_FILE="data/links.json"   # optional, this is the default
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Default snapshot path when neither `DATABASE_URL` nor `LINKS_FILE` is set.
const DEFAULT_LINKS_FILE: &str = "data/links.json";

/// Which storage backend to run, decided once at startup.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// SQLite database reached through `DATABASE_URL`.
    Database { url: String },
    /// JSON snapshot file, fully rewritten on every mutation.
    File { path: PathBuf },
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the SQLite pool
    /// (`DB_MAX_CONNECTIONS`, default: 5). Ignored by the file backend.
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let storage = Self::load_storage();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            storage,
            listen_addr,
            log_level,
            log_format,
            db_max_connections,
        }
    }

    /// Selects the storage backend.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` - SQLite backend
    /// 2. `LINKS_FILE` (or its default) - file backend
    fn load_storage() -> StorageConfig {
        if let Ok(url) = env::var("DATABASE_URL") {
            return StorageConfig::Database { url };
        }

        let path = env::var("LINKS_FILE").unwrap_or_else(|_| DEFAULT_LINKS_FILE.to_string());
        StorageConfig::File { path: path.into() }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `DATABASE_URL` is not a `sqlite:` URL
    /// - `LISTEN` is not `host:port`
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `DB_MAX_CONNECTIONS` is zero
    pub fn validate(&self) -> Result<()> {
        if let StorageConfig::Database { url } = &self.storage
            && !url.starts_with("sqlite:")
        {
            anyhow::bail!("DATABASE_URL must start with 'sqlite:', got '{}'", url);
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match &self.storage {
            StorageConfig::Database { url } => tracing::info!("  Storage: database ({url})"),
            StorageConfig::File { path } => {
                tracing::info!("  Storage: file ({})", path.display())
            }
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
