use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use newsbrief::{
    api::{self, dtos::SummarizeResponse},
    app_state::AppState,
    cache::MemoryCache,
    config::Config,
};

const CACHE_PURGE_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let cache: Arc<MemoryCache<SummarizeResponse>> = Arc::new(MemoryCache::new());
    let purge = cache.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CACHE_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let removed = purge.purge_expired();
            debug!(removed, "purged expired summaries");
        }
    });

    let state = AppState::from_config(&config, cache)?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = config.bind_addr(), "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
