/// Local Ollama embedding provider
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::transport::post_json;
use crate::application::services::{EmbeddingProvider, EmbeddingResult};

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/embeddings";
pub const DEFAULT_OLLAMA_MODEL: &str = "nomic-embed-text";

#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub url: String,
    pub model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    embedding: Vec<f32>,
}

pub struct OllamaProvider {
    client: Client,
    config: OllamaConfig,
}

impl OllamaProvider {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaProvider {
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        debug!("Requesting Ollama embedding from {}", self.config.url);

        let response: OllamaResponse = post_json(
            self.client.post(&self.config.url),
            &OllamaRequest {
                model: &self.config.model,
                prompt: text,
            },
        )
        .await?;

        Ok(response.embedding)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
