//! SQLite pool setup and `shoppingentry` table DDL.

use crate::config::{ServerConfig, ENV_DATABASE_URL};
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// The single table holding shopping entries.
pub const ENTRY_TABLE: &str = "shoppingentry";

/// Open (creating the file if needed) the SQLite store and make sure the entry table exists.
/// Any failure here is a startup failure; callers are expected to abort.
pub async fn open_store(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| {
            tracing::error!(error = %e, "cannot parse database url");
            ConfigError::Invalid {
                key: ENV_DATABASE_URL,
                value: config.database_url.clone(),
            }
        })?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    ensure_tables(&pool).await?;
    tracing::info!(database_url = %config.database_url, "store ready");
    Ok(pool)
}

/// Create the entry table if not exists. `AUTOINCREMENT` keeps ids from being reused after deletes.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created INTEGER NOT NULL,
            "user" TEXT NOT NULL,
            amount INTEGER NOT NULL,
            name TEXT NOT NULL,
            market TEXT NOT NULL,
            done BOOLEAN NOT NULL DEFAULT 0
        )
        "#,
        ENTRY_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
