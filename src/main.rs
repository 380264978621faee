use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod chat;
mod clock;
mod config;
mod journal;
mod models;
mod predictor;
mod routes;
mod store;

use clock::SystemClock;
use config::AppConfig;
use journal::Journal;
use store::{KvStore, MemoryStore, PgStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn KvStore> = match &config.database_url {
        Some(url) => {
            let store = PgStore::connect(url, config.db_max_connections).await?;
            tracing::info!("🗄️ Using Postgres key-value store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("⚠️ DATABASE_URL not set, data will not outlive this process");
            Arc::new(MemoryStore::new())
        }
    };

    let journal = Arc::new(Journal::new(store, Arc::new(SystemClock)));
    let app = routes::app(journal);

    let addr = config.socket_addr()?;
    tracing::info!("🧠 Server running at {}", addr);

    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service(),
    )
    .await?;

    Ok(())
}
