/// Embedding providers and the factory that picks one from configuration
mod fastembed_service;
mod local_server;
mod ollama;
mod openai;
mod transport;

pub use fastembed_service::{FastEmbedProvider, FASTEMBED_DIMENSIONS};
pub use local_server::{LocalServerProvider, DEFAULT_LOCAL_EMBED_URL};
pub use ollama::{OllamaConfig, OllamaProvider, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL};
pub use openai::{OpenAiConfig, OpenAiProvider, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};

use tracing::info;

use crate::application::services::{
    EmbeddingError, EmbeddingMode, EmbeddingProvider, EmbeddingProviderSelector,
    EmbeddingResult,
};

/// Everything needed to construct any of the providers
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub mode: EmbeddingMode,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub ollama: OllamaConfig,
    pub local_url: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            mode: EmbeddingMode::default(),
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            ollama: OllamaConfig::default(),
            local_url: DEFAULT_LOCAL_EMBED_URL.to_string(),
        }
    }
}

/// Build the selector for the configured mode.
///
/// Fails when the openai mode has no credential or the in-process model
/// cannot be loaded.
pub async fn build_selector(config: &EmbeddingConfig) -> EmbeddingResult<EmbeddingProviderSelector> {
    let provider: Box<dyn EmbeddingProvider> = match config.mode {
        EmbeddingMode::OpenAi => {
            let api_key = config.openai_api_key.clone().ok_or_else(|| {
                EmbeddingError::MissingCredential(
                    "OPENAI_API_KEY must be set for the openai embedding mode".to_string(),
                )
            })?;
            Box::new(OpenAiProvider::new(OpenAiConfig {
                api_key,
                base_url: config.openai_base_url.clone(),
                model: config.openai_model.clone(),
            })?)
        }
        EmbeddingMode::Ollama => Box::new(OllamaProvider::new(config.ollama.clone())),
        EmbeddingMode::Local => Box::new(LocalServerProvider::new(config.local_url.clone())),
        EmbeddingMode::FastEmbed => Box::new(FastEmbedProvider::new().await?),
    };

    info!("Embedding provider selected: {}", config.mode);
    Ok(EmbeddingProviderSelector::new(config.mode, provider))
}
