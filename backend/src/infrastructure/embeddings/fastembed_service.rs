/// FastEmbed provider for in-process embedding generation
use async_trait::async_trait;
use fastembed::{EmbeddingModel as FastEmbedModel, InitOptions, TextEmbedding};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::application::services::{EmbeddingError, EmbeddingProvider, EmbeddingResult};

/// Dimension count of the all-MiniLM-L6-v2 model
pub const FASTEMBED_DIMENSIONS: usize = 384;

/// Provider that runs the all-MiniLM-L6-v2 model inside the process
pub struct FastEmbedProvider {
    model: Arc<Mutex<TextEmbedding>>,
}

impl FastEmbedProvider {
    /// Load the model, downloading it on first use
    pub async fn new() -> EmbeddingResult<Self> {
        info!("Initializing FastEmbed provider (all-MiniLM-L6-v2)");

        let model = TextEmbedding::try_new(
            InitOptions::new(FastEmbedModel::AllMiniLML6V2).with_show_download_progress(true),
        )
        .map_err(|e| EmbeddingError::Model(format!("Failed to initialize FastEmbed model: {}", e)))?;

        info!("FastEmbed model initialized successfully");

        Ok(FastEmbedProvider {
            model: Arc::new(Mutex::new(model)),
        })
    }

    pub fn dimension_count(&self) -> usize {
        FASTEMBED_DIMENSIONS
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        debug!("Generating embedding for text (length: {})", text.len());

        let mut model = self.model.lock().await;
        let embeddings = model
            .embed(vec![text], None)
            .map_err(|e| EmbeddingError::Model(format!("Failed to generate embedding: {}", e)))?;

        embeddings
            .into_iter()
            .next()
            .ok_or(EmbeddingError::EmptyResult)
    }

    fn name(&self) -> &str {
        "fastembed"
    }
}
