use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use blog_api::config::{self, AppConfig, StorageBackend};
use blog_api::database::{DatabaseManager, MemoryStore, PgStore};
use blog_api::{app, is_production, AppState};

#[derive(Parser)]
#[command(name = "blog-api")]
#[command(about = "Blog API server: registration, login, posts and comments")]
#[command(version)]
struct Args {
    #[arg(long, help = "Port to listen on (overrides BLOG_API_PORT / PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Storage backend: postgres or memory (overrides BLOG_STORAGE)")]
    storage: Option<StorageBackend>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let args = Args::parse();

    let mut config: AppConfig = config::config().clone();
    if let Some(port) = args.port {
        config.api.port = port;
    }
    if let Some(storage) = args.storage {
        config.database.storage = storage;
    }
    tracing::info!("Starting Blog API in {:?} mode", config.environment);

    let state = match config.database.storage {
        StorageBackend::Postgres => {
            let pool = DatabaseManager::connect(&config.database)
                .await
                .context("failed to connect to the document store")?;
            AppState::new(Arc::new(PgStore::new(pool)), &config)
        }
        StorageBackend::Memory => {
            if is_production!() {
                tracing::warn!("Running production with in-memory storage; data is lost on restart");
            } else {
                tracing::info!("Using in-memory storage");
            }
            AppState::new(Arc::new(MemoryStore::new()), &config)
        }
    }
    .context("invalid token settings: check JWT_SECRET and JWT_EXPIRY_HOURS")?;

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Blog API listening on http://{}", bind_addr);

    axum::serve(listener, app(state, &config)).await.context("server error")?;
    Ok(())
}
