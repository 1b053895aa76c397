use std::sync::Arc;

use anyhow::Result;
use pantry_recipe::CorpusStore;
use tower_http::compression::CompressionLayer;

use crate::{Config, routes::AppState};

pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting pantry server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let corpus = Arc::new(CorpusStore::new(super::load_corpus(&config)?));
    let suggestions = crate::suggestion_service(&config)?;

    let state = AppState {
        config,
        corpus,
        suggestions,
    };

    let app = crate::routes::router(state).layer(CompressionLayer::new());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
