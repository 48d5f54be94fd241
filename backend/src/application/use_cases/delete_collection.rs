use tracing::info;

use super::error::{BridgeError, BridgeResult};
use crate::application::dto::DeleteCollectionRequest;
use crate::application::repositories::VectorStore;
use crate::domain::CollectionName;

/// Use case for dropping a whole collection by name
pub struct DeleteCollection<'a, S: VectorStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: VectorStore + ?Sized> DeleteCollection<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn execute(&self, request: DeleteCollectionRequest) -> BridgeResult<CollectionName> {
        let name = CollectionName::new(request.collection.unwrap_or_default())
            .map_err(|_| BridgeError::Validation("Invalid request".to_string()))?;

        self.store
            .delete_collection(&name)
            .await
            .map_err(BridgeError::store("Failed to delete collection"))?;

        info!("Deleted collection: {}", name);
        Ok(name)
    }
}
