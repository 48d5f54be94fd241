use thiserror::Error;

use crate::application::repositories::StoreError;
use crate::application::services::EmbeddingError;
use crate::domain::DomainError;

/// Failure of a bridge use case
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Bad or missing input
    #[error("{0}")]
    Validation(String),

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// A computed embedding does not fit the configured dimensionality
    #[error("{0}")]
    Dimension(DomainError),

    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl BridgeError {
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| BridgeError::Store { context, source }
    }

    /// True for errors caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, BridgeError::Validation(_))
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
