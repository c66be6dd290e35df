//! Directory Layer
//!
//! `SQLite`-backed storage for users and the roles they hold.

mod error;
mod models;
mod queries;
pub mod roles;


use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
pub use error::DirectoryError;
pub use models::*;
pub use queries::*;
pub use roles::BuiltinRole;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Create `SQLite` connection pool with health configuration.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        // WAL lets reads proceed while a write is in flight
        .journal_mode(SqliteJournalMode::Wal)
        // Writers queue instead of failing immediately on lock contention
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        // SQLite serializes writers; a small pool is plenty
        .max_connections(8)
        // Prevent hanging requests on pool exhaustion
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    info!("Connected to SQLite");
    Ok(pool)
}

/// Run database migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed");
    Ok(())
}
