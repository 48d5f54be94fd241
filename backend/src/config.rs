/// Process configuration, read once at startup from flags or environment
use clap::Parser;
use std::net::SocketAddr;

use crate::application::services::EmbeddingMode;
use crate::domain::CollectionName;
use crate::infrastructure::embeddings::{
    EmbeddingConfig, OllamaConfig, DEFAULT_LOCAL_EMBED_URL, DEFAULT_OLLAMA_MODEL,
    DEFAULT_OLLAMA_URL, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "vector-bridge", version, about = "HTTP bridge to a Qdrant vector database")]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: SocketAddr,

    /// Qdrant gRPC endpoint
    #[arg(long, env = "QDRANT_URL", default_value = "http://localhost:6334")]
    pub qdrant_url: String,

    #[arg(long, env = "QDRANT_API_KEY", hide_env_values = true)]
    pub qdrant_api_key: Option<String>,

    /// Default collection used by search and add
    #[arg(long, env = "COLLECTION", default_value = "test_collection")]
    pub collection: String,

    /// Vector dimensionality
    #[arg(long, env = "VECTOR_SIZE", default_value_t = 1536)]
    pub vector_size: usize,

    /// Embedding backend: openai, ollama, local or fastembed
    #[arg(long, env = "EMBEDDING_MODE", default_value = "openai")]
    pub embedding_mode: EmbeddingMode,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_OPENAI_BASE_URL)]
    pub openai_base_url: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_OPENAI_MODEL)]
    pub openai_model: String,

    #[arg(long, env = "OLLAMA_URL", default_value = DEFAULT_OLLAMA_URL)]
    pub ollama_url: String,

    #[arg(long, env = "OLLAMA_MODEL", default_value = DEFAULT_OLLAMA_MODEL)]
    pub ollama_model: String,

    #[arg(long, env = "LOCAL_EMBED_URL", default_value = DEFAULT_LOCAL_EMBED_URL)]
    pub local_embed_url: String,
}

impl Config {
    /// Check the values clap cannot check on its own
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.vector_size == 0 {
            anyhow::bail!("VECTOR_SIZE must be greater than zero");
        }
        CollectionName::new(self.collection.clone())
            .map_err(|e| anyhow::anyhow!("COLLECTION: {}", e))?;
        if self.embedding_mode == EmbeddingMode::OpenAi
            && self
                .openai_api_key
                .as_deref()
                .map_or(true, |key| key.trim().is_empty())
        {
            anyhow::bail!("OPENAI_API_KEY must be set when EMBEDDING_MODE=openai");
        }
        Ok(())
    }

    pub fn collection_name(&self) -> anyhow::Result<CollectionName> {
        CollectionName::new(self.collection.clone()).map_err(|e| anyhow::anyhow!("COLLECTION: {}", e))
    }

    pub fn embedding_config(&self) -> EmbeddingConfig {
        EmbeddingConfig {
            mode: self.embedding_mode,
            openai_api_key: self.openai_api_key.clone(),
            openai_base_url: self.openai_base_url.clone(),
            openai_model: self.openai_model.clone(),
            ollama: OllamaConfig {
                url: self.ollama_url.clone(),
                model: self.ollama_model.clone(),
            },
            local_url: self.local_embed_url.clone(),
        }
    }
}
