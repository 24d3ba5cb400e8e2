//! Configuration parsing for the Subtrack server.
//!
//! Supports:
//! - CLI arguments via clap
//! - Environment variable overrides
//! - Sensible defaults for quick start

use clap::Parser;
use std::path::PathBuf;

/// Subtrack: a subscription tracker with a JSON HTTP API.
#[derive(Parser, Debug, Clone)]
#[command(name = "subtrack")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "SUBTRACK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "SUBTRACK_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Data directory for the SQLite database
    #[arg(short, long, env = "SUBTRACK_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Size of the database connection pool
    #[arg(long, env = "SUBTRACK_POOL_SIZE", default_value_t = 10)]
    pub pool_size: u32,
}

impl Config {
    /// Parse configuration from CLI arguments and environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Path of the SQLite database file inside the data directory.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("subtrack.db")
    }

    /// Create a default configuration for testing.
    #[cfg(test)]
    pub fn test_config(data_dir: PathBuf) -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0, // Random port
            data_dir,
            log_level: "debug".into(),
            pool_size: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            data_dir: PathBuf::from("./data"),
            log_level: "info".into(),
            pool_size: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.pool_size, 10);
    }

    #[test]
    fn test_db_path_is_inside_data_dir() {
        let config = Config::test_config(PathBuf::from("/tmp/subtrack-test"));
        assert_eq!(
            config.db_path(),
            PathBuf::from("/tmp/subtrack-test/subtrack.db")
        );
    }
}
