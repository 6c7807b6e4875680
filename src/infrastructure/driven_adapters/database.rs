//! Database Connection Management
//!
//! Utilities for creating the connection pool and applying schema migrations.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::DatabaseConfig;

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns `sqlx::Error` if the database is unreachable.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await
}

/// Apply any pending migrations from the bundled `migrations/` directory
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails or the history table is
/// inconsistent with the bundled files.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
