//! Configuration loading — TOML file with environment variable overrides.
//!
//! `userhub.toml` in the working directory is optional; missing keys fall back
//! to defaults. Environment variables are applied on top:
//!
//! | Variable | Overrides |
//! |---|---|
//! | `USERHUB_BIND` | `server.bind` (`host:port`, IP literal) |
//! | `USERHUB_DATABASE_PATH` | `database.path` |
//! | `USERHUB_BUSY_TIMEOUT_MS` | `database.busy_timeout_ms` |
//! | `RUST_LOG`, else `USERHUB_LOG` | `logging.filter` |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use userhub_adapter_storage_sqlite_sqlx::Config as StoreConfig;

const CONFIG_FILE: &str = "userhub.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    pub bind: SocketAddr,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` file holding the users collection.
    pub path: PathBuf,
    /// Wait on a locked store file before reporting it unavailable.
    pub busy_timeout_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 11111)),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(userhub_adapter_storage_sqlite_sqlx::store::DEFAULT_PATH),
            busy_timeout_ms: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "userhub=info,tower_http=debug".to_string(),
        }
    }
}

impl Config {
    /// Read `userhub.toml` (if present), apply the process environment, and
    /// validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is unreadable or malformed, an
    /// override cannot be parsed, or the result is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(content) => Self::parse(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => return Err(ConfigError::Io(err)),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides read through `lookup` (the environment in production).
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("USERHUB_BIND") {
            self.server.bind = parse_var("USERHUB_BIND", value)?;
        }
        if let Some(value) = lookup("USERHUB_DATABASE_PATH") {
            self.database.path = PathBuf::from(value);
        }
        if let Some(value) = lookup("USERHUB_BUSY_TIMEOUT_MS") {
            self.database.busy_timeout_ms = Some(parse_var("USERHUB_BUSY_TIMEOUT_MS", value)?);
        }
        if let Some(filter) = lookup("RUST_LOG").or_else(|| lookup("USERHUB_LOG")) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.port() == 0 {
            return Err(ConfigError::Validation("port must be non-zero"));
        }
        if self.database.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("database path must not be empty"));
        }
        Ok(())
    }

    /// Store settings for the `SQLite` adapter.
    #[must_use]
    pub fn store(&self) -> StoreConfig {
        let store = StoreConfig::new(&self.database.path);
        match self.database.busy_timeout_ms {
            Some(ms) => store.with_busy_timeout(Duration::from_millis(ms)),
            None => store,
        }
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidVar { var, value })
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid value {value:?} for {var}")]
    InvalidVar { var: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Validation(&'static str),
}
