use tracing::debug;

use super::error::{BridgeError, BridgeResult};
use crate::application::repositories::VectorStore;
use crate::application::services::EmbeddingProviderSelector;
use crate::domain::ScoredPoint;

/// Use case for semantic search over the default collection
///
/// Embeds the search term, checks the vector against the configured
/// dimensionality and asks the store for the nearest points.
pub struct SearchSimilarPoints<'a, S: VectorStore + ?Sized> {
    embedder: &'a EmbeddingProviderSelector,
    store: &'a S,
}

impl<'a, S: VectorStore + ?Sized> SearchSimilarPoints<'a, S> {
    pub fn new(embedder: &'a EmbeddingProviderSelector, store: &'a S) -> Self {
        Self { embedder, store }
    }

    pub async fn execute(&self, term: Option<&str>) -> BridgeResult<Vec<ScoredPoint>> {
        let term = match term {
            Some(term) if !term.is_empty() => term,
            _ => return Err(BridgeError::Validation("Missing search term".to_string())),
        };

        let vector = self.embedder.embed(term).await?;
        vector
            .ensure_dimension(self.store.dimension_count())
            .map_err(BridgeError::Dimension)?;

        let results = self
            .store
            .search(&vector)
            .await
            .map_err(BridgeError::store("Vector search failed"))?;

        debug!("Search for '{}' returned {} results", term, results.len());
        Ok(results)
    }
}
