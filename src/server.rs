//! Router assembly with the HTTP middleware stack, the serve loop, logging setup, and shutdown signal.

use crate::config::ServerConfig;
use crate::routes::{common_routes, entry_routes};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::Router;
use sqlx::SqlitePool;
use std::future::Future;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "shopping_list=info,shopping_server=info,tower_http=info";

/// Install the global fmt subscriber. `RUST_LOG` wins over the built-in filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();
}

/// Entry and service routes behind tracing, CORS, a per-request deadline (408), and a body size cap.
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .merge(common_routes(state.clone()))
        .merge(entry_routes(state))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
}

/// Bind `config.bind_addr` and serve until `shutdown` resolves. The pool is closed on every exit path,
/// including a failed bind.
pub async fn serve<F>(pool: SqlitePool, config: &ServerConfig, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let result = bind_and_serve(pool.clone(), config, shutdown).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, bind_addr = %config.bind_addr, "server stopped with error");
    }
    pool.close().await;
    tracing::info!("store closed");
    result
}

async fn bind_and_serve<F>(pool: SqlitePool, config: &ServerConfig, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("shopping list listening on http://{}", listener.local_addr()?);
    let app = build_app(AppState { pool }, config);
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received, draining requests");
}
