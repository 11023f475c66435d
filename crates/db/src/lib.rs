//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository traits and their `SeaORM` implementations
//! - Database migrations
//! - Connection bootstrap for file-backed and in-memory SQLite

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{ProductRepository, ProductStore, StoreError, UserRepository, UserStore};

use std::time::Duration;

use catalog_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::migration::Migrator;

/// Lifetime of the single in-memory connection. Dropping it drops the
/// database, so it is kept far beyond any realistic uptime.
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Builds pool options for the configured database.
///
/// An in-memory database is private to its connection, so the pool is
/// pinned to exactly one connection in that mode and that connection is
/// never recycled for age or idleness.
#[must_use]
pub fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.url());
    options
        .connect_timeout(config.timeout())
        .acquire_timeout(config.timeout());

    if config.is_memory() {
        options
            .max_connections(1)
            .min_connections(1)
            .max_lifetime(MEMORY_CONNECTION_LIFETIME)
            .idle_timeout(MEMORY_CONNECTION_LIFETIME);
    } else {
        options.max_connections(config.max_connections);
    }

    options
}

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    Database::connect(connect_options(config)).await
}

/// Connects and brings the schema up to date.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn setup(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = connect(config).await?;
    Migrator::up(&db, None).await?;
    info!(url = %config.url(), "Database ready");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_connection_is_pinned_and_long_lived() {
        let options = connect_options(&DatabaseConfig::in_memory());

        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
        assert_eq!(options.get_max_lifetime(), Some(MEMORY_CONNECTION_LIFETIME));
        assert_eq!(options.get_idle_timeout(), Some(MEMORY_CONNECTION_LIFETIME));
    }

    #[test]
    fn test_file_pool_keeps_default_recycling() {
        let config = DatabaseConfig {
            file: "catalog.db".to_string(),
            mode: "rwc".to_string(),
            timeout_secs: 7,
            max_connections: 4,
        };

        let options = connect_options(&config);

        assert_eq!(options.get_url(), "sqlite://catalog.db?mode=rwc");
        assert_eq!(options.get_max_connections(), Some(4));
        assert_eq!(options.get_connect_timeout(), Some(Duration::from_secs(7)));
        assert_eq!(options.get_max_lifetime(), None);
    }
}
