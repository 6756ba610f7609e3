mod catalog;
mod config;
mod model;
mod normalizer;
mod parser;
mod routes;
mod server;
mod source;

use catalog::CatalogCache;
use config::load_config;
use source::SheetSource;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    info!(
        "🚀 stokbot starting (ttl {}s, bind {})",
        config.cache_ttl_seconds, config.bind_addr
    );

    let source = Arc::new(SheetSource::new(config.sheet_csv_url.clone()));
    let catalog = CatalogCache::new(source, config.cache_ttl_seconds);

    let state = server::AppState { catalog };
    if let Err(e) = server::run(state, &config.bind_addr).await {
        error!("Server error: {}", e);
    }
}
