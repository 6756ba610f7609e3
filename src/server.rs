//! HTTP server wiring.

use crate::catalog::CatalogCache;
use crate::routes;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// State shared across request handlers.
pub struct AppState {
    pub catalog: CatalogCache,
}

/// Binds the listener and serves until the process is stopped.
pub async fn run(state: AppState, addr: &str) -> std::io::Result<()> {
    let state = Arc::new(state);

    let app = routes::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
