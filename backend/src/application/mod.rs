pub mod dto;
pub mod repositories;
pub mod services;
pub mod use_cases;

pub use dto::{
    AddPointRequest, AddPointResponse, DeleteCollectionRequest, ScoredPointResponse,
    SearchParams, StatusResponse,
};
pub use repositories::{StoreError, StoreResult, VectorStore};
pub use services::{
    EmbeddingError, EmbeddingMode, EmbeddingProvider, EmbeddingProviderSelector,
    EmbeddingResult,
};
pub use use_cases::{AddPoint, BridgeError, BridgeResult, DeleteCollection, SearchSimilarPoints};
