//! Shopping list: shared shopping entries over HTTP, persisted in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{CreateEntryRequest, ListFilter, NewShoppingEntry, ShoppingEntry, UpdateEntryRequest};
pub use routes::{common_routes, entry_routes};
pub use server::{build_app, init_tracing, serve, shutdown_signal};
pub use service::EntryService;
pub use state::AppState;
pub use store::{ensure_tables, open_store};
