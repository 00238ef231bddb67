//! Shopping list server: loads config from env (and `.env`), opens the SQLite store, serves the entry API.
//!
//! Run from repo root: `cargo run -p shopping-server`

use shopping_list::{init_tracing, open_store, serve, shutdown_signal, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ServerConfig::from_env()?;
    let pool = open_store(&config).await?;
    serve(pool, &config, shutdown_signal()).await?;
    tracing::info!("bye");
    Ok(())
}
