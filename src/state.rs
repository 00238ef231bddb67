//! Shared application state for all routes. The pool is created at startup and closed after shutdown.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
