use shopping_list::{open_store, serve, ServerConfig};
use tokio::net::TcpListener;

fn store_config(dir: &tempfile::TempDir, bind_addr: String) -> ServerConfig {
    let mut config =
        ServerConfig::with_database_url(format!("sqlite://{}", dir.path().join("shopping.db").display()));
    config.bind_addr = bind_addr;
    config
}

#[tokio::test]
async fn failed_bind_still_closes_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let config = store_config(&dir, taken.local_addr().unwrap().to_string());
    let pool = open_store(&config).await.unwrap();

    let result = serve(pool.clone(), &config, std::future::pending()).await;

    assert!(result.is_err());
    assert!(pool.is_closed());
}

#[tokio::test]
async fn graceful_shutdown_closes_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = store_config(&dir, "127.0.0.1:0".into());
    let pool = open_store(&config).await.unwrap();

    let result = serve(pool.clone(), &config, async {}).await;

    assert!(result.is_ok());
    assert!(pool.is_closed());
}
