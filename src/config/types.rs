//! Runtime settings for the server and the SQLite store.

use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://shopping_sqlite3.bin";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
    /// Upper bound on pooled SQLite connections. At least 1.
    pub max_connections: u32,
    /// Per-request deadline; requests running longer get 408.
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl ServerConfig {
    /// Config pointing at a specific store file, everything else default. Handy for tests and tools.
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        ServerConfig {
            database_url: database_url.into(),
            ..ServerConfig::default()
        }
    }
}
