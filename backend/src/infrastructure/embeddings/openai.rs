/// Remote embedding provider for the OpenAI embeddings API
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::transport::post_json;
use crate::application::services::{EmbeddingError, EmbeddingProvider, EmbeddingResult};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "text-embedding-ada-002";

/// Configuration for the OpenAI provider
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    /// API base, `/embeddings` is appended
    pub base_url: String,
    pub model: String,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f64>,
}

pub struct OpenAiProvider {
    client: Client,
    endpoint: String,
    config: OpenAiConfig,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> EmbeddingResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(EmbeddingError::MissingCredential(
                "OPENAI_API_KEY must be set for the openai embedding mode".to_string(),
            ));
        }

        let endpoint = format!("{}/embeddings", config.base_url.trim_end_matches('/'));
        info!(
            "Initializing OpenAI embedding provider: endpoint={}, model={}",
            endpoint, config.model
        );

        Ok(Self {
            client: Client::new(),
            endpoint,
            config,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiProvider {
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        debug!("Sending embedding request to {}", self.endpoint);

        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.config.api_key);
        let response: EmbeddingResponse = post_json(
            request,
            &EmbeddingRequest {
                model: &self.config.model,
                input: [text],
            },
        )
        .await?;

        let first = response
            .data
            .into_iter()
            .next()
            .ok_or(EmbeddingError::EmptyResult)?;

        Ok(first.embedding.into_iter().map(|v| v as f32).collect())
    }

    fn name(&self) -> &str {
        "openai"
    }
}
