use tracing::{debug, info};

use super::error::{BridgeError, BridgeResult};
use crate::application::dto::AddPointRequest;
use crate::application::repositories::VectorStore;
use crate::application::services::EmbeddingProviderSelector;
use crate::domain::{EmbeddingVector, PointId};

/// Use case for adding one point to the default collection
pub struct AddPoint<'a, S: VectorStore + ?Sized> {
    embedder: &'a EmbeddingProviderSelector,
    store: &'a S,
}

impl<'a, S: VectorStore + ?Sized> AddPoint<'a, S> {
    pub fn new(embedder: &'a EmbeddingProviderSelector, store: &'a S) -> Self {
        Self { embedder, store }
    }

    /// Store the request as a new point and return its generated id
    ///
    /// A vector of the configured length is used as-is. Otherwise a
    /// non-empty `text` is embedded. Anything else is a validation error.
    pub async fn execute(&self, request: AddPointRequest) -> BridgeResult<PointId> {
        let dimension_count = self.store.dimension_count();

        let vector = match (request.vector, request.text) {
            (Some(values), _) if values.len() == dimension_count => {
                debug!("Using caller-supplied vector");
                EmbeddingVector::with_dimension(values, dimension_count)
                    .map_err(BridgeError::Dimension)?
            }
            (_, Some(text)) if !text.is_empty() => self.embedder.embed(&text).await?,
            _ => {
                return Err(BridgeError::Validation(
                    "Missing vector or text".to_string(),
                ))
            }
        };

        vector
            .ensure_dimension(dimension_count)
            .map_err(BridgeError::Dimension)?;

        let id = PointId::generate();
        self.store
            .insert_point(
                id.clone(),
                self.store.collection_name(),
                vector,
                request.payload.unwrap_or_default(),
            )
            .await
            .map_err(BridgeError::store("Failed to add vector"))?;

        info!("Added point {} to '{}'", id, self.store.collection_name());
        Ok(id)
    }
}
