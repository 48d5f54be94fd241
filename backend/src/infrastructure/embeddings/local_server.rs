/// Generic local embedding server: `{"text": ...}` in, `{"vector": [...]}` out
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::transport::post_json;
use crate::application::services::{EmbeddingProvider, EmbeddingResult};

pub const DEFAULT_LOCAL_EMBED_URL: &str = "http://localhost:8000/embed";

#[derive(Debug, Serialize)]
struct LocalRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct LocalResponse {
    vector: Vec<f32>,
}

pub struct LocalServerProvider {
    client: Client,
    url: String,
}

impl LocalServerProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for LocalServerProvider {
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        debug!("Requesting local embedding from {}", self.url);

        let response: LocalResponse =
            post_json(self.client.post(&self.url), &LocalRequest { text }).await?;

        Ok(response.vector)
    }

    fn name(&self) -> &str {
        "local"
    }
}
