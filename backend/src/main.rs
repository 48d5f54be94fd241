use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vector_bridge::application::services::EmbeddingMode;
use vector_bridge::config::Config;
use vector_bridge::infrastructure::embeddings::{build_selector, FASTEMBED_DIMENSIONS};
use vector_bridge::infrastructure::http::{self, AppState};
use vector_bridge::infrastructure::persistence::QdrantVectorStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    info!(
        "Starting vector-bridge: mode={}, collection={}, dimensions={}",
        config.embedding_mode, config.collection, config.vector_size
    );

    if config.embedding_mode == EmbeddingMode::FastEmbed && config.vector_size != FASTEMBED_DIMENSIONS {
        warn!(
            "fastembed produces {} dimensions but VECTOR_SIZE is {}; embeddings will be rejected",
            FASTEMBED_DIMENSIONS, config.vector_size
        );
    }

    let embedder = build_selector(&config.embedding_config())
        .await
        .context("Failed to initialize embedding provider")?;

    let store = QdrantVectorStore::connect(
        &config.qdrant_url,
        config.qdrant_api_key.clone(),
        config.collection_name()?,
        config.vector_size,
    )
    .await?;

    let state = AppState::new(Arc::new(embedder), Arc::new(store));

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    http::serve(listener, state, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}
