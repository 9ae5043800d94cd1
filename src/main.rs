mod config;
mod db;
mod model;
mod pages;
mod routes;
mod scoring;
mod services;
mod state;
mod store;
mod validate;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use config::{AppConfig, ConfigError};
use store::{MemoryPlayerStore, PgPlayerStore, PlayerStore};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("database init failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "basketball-ranking stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;
    let store = open_store(&config).await?;

    let state = state::AppState::new(store, config.listing);
    let app = routes::app(state, &config.cors_allowed_origins);
    let listener = bind(config.bind_addr, config.port).await?;

    tracing::info!(port = config.port, "basketball-ranking listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}

/// Postgres when configured; otherwise run on an in-memory store.
async fn open_store(config: &AppConfig) -> Result<Arc<dyn PlayerStore>, StartupError> {
    match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = db::init_pool(database_url, config.db_max_connections).await?;
            tracing::info!(max_connections = config.db_max_connections, "postgres player store ready");
            Ok(Arc::new(PgPlayerStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory player store (data is not persisted)");
            Ok(Arc::new(MemoryPlayerStore::new()))
        }
    }
}

async fn bind(ip: IpAddr, port: u16) -> Result<tokio::net::TcpListener, StartupError> {
    let addr = SocketAddr::new(ip, port);
    tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
