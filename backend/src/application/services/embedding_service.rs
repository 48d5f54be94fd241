/// Embedding provider abstraction and the selector built from configuration
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::domain::value_objects::EmbeddingVector;

#[derive(Error, Debug)]
pub enum EmbeddingError {
    #[error("Embedding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Embedding provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed embedding response: {0}")]
    MalformedResponse(String),

    #[error("Embedding provider returned no embedding")]
    EmptyResult,

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Embedding model error: {0}")]
    Model(String),
}

pub type EmbeddingResult<T> = Result<T, EmbeddingError>;

/// Which embedding backend the process talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbeddingMode {
    /// Remote OpenAI embeddings API
    #[default]
    OpenAi,
    /// Local Ollama server (`{model, prompt}` -> `embedding`)
    Ollama,
    /// Local embedding server (`{text}` -> `vector`)
    Local,
    /// In-process fastembed model
    FastEmbed,
}

impl EmbeddingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbeddingMode::OpenAi => "openai",
            EmbeddingMode::Ollama => "ollama",
            EmbeddingMode::Local => "local",
            EmbeddingMode::FastEmbed => "fastembed",
        }
    }
}

impl FromStr for EmbeddingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(EmbeddingMode::OpenAi),
            "ollama" => Ok(EmbeddingMode::Ollama),
            "local" => Ok(EmbeddingMode::Local),
            "fastembed" => Ok(EmbeddingMode::FastEmbed),
            other => Err(format!(
                "unknown embedding mode '{}' (expected openai, ollama, local or fastembed)",
                other
            )),
        }
    }
}

impl fmt::Display for EmbeddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A backend that turns one text into one raw embedding
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

/// Dispatches texts to the provider chosen at startup.
///
/// The mode is fixed for the lifetime of the selector.
pub struct EmbeddingProviderSelector {
    mode: EmbeddingMode,
    provider: Box<dyn EmbeddingProvider>,
}

impl EmbeddingProviderSelector {
    pub fn new(mode: EmbeddingMode, provider: Box<dyn EmbeddingProvider>) -> Self {
        Self { mode, provider }
    }

    #[cfg(test)]
    pub(crate) fn mode(&self) -> EmbeddingMode {
        self.mode
    }

    /// Generate the embedding for a single text
    pub async fn embed(&self, text: &str) -> EmbeddingResult<EmbeddingVector> {
        debug!(
            "Generating embedding via {} ({} mode, text length: {})",
            self.provider.name(),
            self.mode,
            text.len()
        );

        let values = self.provider.embed(text).await?;
        EmbeddingVector::new(values).map_err(|_| EmbeddingError::EmptyResult)
    }
}
