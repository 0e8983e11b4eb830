//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Directory for the daily error log files.
    pub log_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ROSTER_API_ADDR` | Server bind address | `127.0.0.1:8789` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:roster.db?mode=rwc` |
    /// | `ROSTER_LOG_DIR` | Error log directory | `log` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("ROSTER_API_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8789".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url =
            env::var("SQLITE_PATH").unwrap_or_else(|_| "sqlite:roster.db?mode=rwc".to_string());

        let log_dir = env::var("ROSTER_LOG_DIR")
            .unwrap_or_else(|_| "log".to_string())
            .into();

        Ok(Self {
            addr,
            database_url,
            log_dir,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ROSTER_API_ADDR format")]
    InvalidAddr,
}
