pub mod embedding_service;

pub use embedding_service::{
    EmbeddingError, EmbeddingMode, EmbeddingProvider, EmbeddingProviderSelector,
    EmbeddingResult,
};
