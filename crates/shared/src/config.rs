//! Application configuration management.
//!
//! Settings come from an optional `config/default` file and the process
//! environment (`DB_FILE`, `DB_MODE`, `DB_TIMEOUT`, `JWT_SECRET`,
//! `JWT_EXPIRATION`, ...). Empty environment values count as unset.

use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::jwt::JwtConfig;

/// SQLite open modes accepted in `DB_MODE`.
const DB_MODES: [&str; 4] = ["ro", "rw", "rwc", "memory"];

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtConfig,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Returns the `host:port` bind address.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite database file.
    pub file: String,
    /// SQLite open mode (`ro`, `rw`, `rwc`) or `memory`.
    pub mode: String,
    /// Connect and acquire timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Configuration for a private in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            file: ":memory:".to_string(),
            mode: "memory".to_string(),
            timeout_secs: default_db_timeout(),
            max_connections: 1,
        }
    }

    /// Returns true when the store lives only in memory.
    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.mode == "memory" || self.file == ":memory:"
    }

    /// Builds the SeaORM connection URL.
    #[must_use]
    pub fn url(&self) -> String {
        if self.is_memory() {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite://{}?mode={}", self.file, self.mode)
        }
    }

    /// Returns the connect/acquire timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Flat view of the environment, one field per variable.
#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(default = "default_host")]
    server_host: String,
    #[serde(default = "default_port")]
    server_port: u16,
    #[serde(default = "default_db_file")]
    db_file: String,
    #[serde(default = "default_db_mode")]
    db_mode: String,
    #[serde(default = "default_db_timeout")]
    db_timeout: u64,
    #[serde(default = "default_max_connections")]
    db_max_connections: u32,
    #[serde(default)]
    jwt_secret: String,
    #[serde(default = "default_jwt_expiration")]
    jwt_expiration: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_db_file() -> String {
    "catalog.db".to_string()
}

fn default_db_mode() -> String {
    "rwc".to_string()
}

fn default_db_timeout() -> u64 {
    5
}

fn default_max_connections() -> u32 {
    10
}

fn default_jwt_expiration() -> u64 {
    3600 // 1 hour
}

impl TryFrom<RawSettings> for AppConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        if raw.jwt_secret.trim().is_empty() {
            return Err(ConfigError::Message("JWT_SECRET must be set".to_string()));
        }
        if !DB_MODES.contains(&raw.db_mode.as_str()) {
            return Err(ConfigError::Message(format!(
                "DB_MODE must be one of {DB_MODES:?}, got '{}'",
                raw.db_mode
            )));
        }
        if raw.jwt_expiration == 0 {
            return Err(ConfigError::Message(
                "JWT_EXPIRATION must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            server: ServerConfig {
                host: raw.server_host,
                port: raw.server_port,
            },
            database: DatabaseConfig {
                file: raw.db_file,
                mode: raw.db_mode,
                timeout_secs: raw.db_timeout,
                max_connections: raw.db_max_connections.max(1),
            },
            jwt: JwtConfig {
                secret: raw.jwt_secret,
                expires_in_secs: raw.jwt_expiration,
            },
        })
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, a value does not
    /// parse, or `JWT_SECRET` is missing.
    pub fn load() -> Result<Self, ConfigError> {
        let raw: RawSettings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::default().ignore_empty(true))
            .build()?
            .try_deserialize()?;

        raw.try_into()
    }
}
