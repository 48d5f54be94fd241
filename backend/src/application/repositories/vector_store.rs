use crate::domain::{
    CollectionName, DomainError, EmbeddingVector, Payload, Point, PointId, ScoredPoint,
};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Number of hits returned by [`VectorStore::search`]
pub const SEARCH_LIMIT: u64 = 3;

/// Payload fields returned with each search hit
pub const SEARCH_PAYLOAD_FIELDS: &[&str] = &["question", "answers"];

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Collection already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid vector: {0}")]
    InvalidVector(#[from] DomainError),

    #[error("Vector database error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Contract for the vector database backing the bridge.
///
/// Implementations provide the raw single-shot operations. The provided
/// methods layer the bridge's policies on top: idempotent collection
/// creation, dimension checks and the search-miss recovery.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// The default collection used by search and batch inserts
    fn collection_name(&self) -> &CollectionName;

    /// Configured vector dimensionality
    fn dimension_count(&self) -> usize;

    /// Creates a cosine-distance collection.
    ///
    /// Must return `StoreError::AlreadyExists` when the collection is present.
    async fn try_create_collection(
        &self,
        name: &CollectionName,
        dimension_count: usize,
    ) -> StoreResult<()>;

    /// Deletes a collection, surfacing any database error unchanged.
    async fn delete_collection(&self, name: &CollectionName) -> StoreResult<()>;

    /// Upserts points and waits until the write is applied.
    async fn upsert_points(&self, collection: &CollectionName, points: Vec<Point>)
        -> StoreResult<()>;

    /// One similarity search attempt against `collection`.
    ///
    /// Must return `StoreError::CollectionNotFound` when the collection is missing.
    async fn search_points(
        &self,
        collection: &CollectionName,
        vector: &EmbeddingVector,
        limit: u64,
        payload_fields: &[&str],
    ) -> StoreResult<Vec<ScoredPoint>>;

    /// Creates a collection, treating "already exists" as success.
    async fn create_collection(
        &self,
        name: &CollectionName,
        dimension_count: usize,
    ) -> StoreResult<()> {
        match self.try_create_collection(name, dimension_count).await {
            Ok(()) => {
                info!("Created collection '{}' with {} dimensions", name, dimension_count);
                Ok(())
            }
            Err(StoreError::AlreadyExists(_)) => {
                debug!("Collection '{}' already exists", name);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Insert a single point into `collection`
    async fn insert_point(
        &self,
        id: PointId,
        collection: &CollectionName,
        vector: EmbeddingVector,
        payload: Payload,
    ) -> StoreResult<()> {
        vector.ensure_dimension(self.dimension_count())?;
        debug!("Inserting point {} into '{}'", id, collection);
        self.upsert_points(collection, vec![Point::new(id, vector, payload)])
            .await
    }

    /// Batch insert into the default collection
    async fn insert_points(&self, points: Vec<Point>) -> StoreResult<()> {
        if points.is_empty() {
            return Ok(());
        }

        for point in &points {
            point.vector().ensure_dimension(self.dimension_count())?;
        }

        debug!("Inserting batch of {} points", points.len());
        let collection = self.collection_name().clone();
        self.upsert_points(&collection, points).await
    }

    /// Search the default collection for the nearest points.
    ///
    /// A missing collection is created once with the configured
    /// dimensionality and the search is retried a single time.
    async fn search(&self, vector: &EmbeddingVector) -> StoreResult<Vec<ScoredPoint>> {
        vector.ensure_dimension(self.dimension_count())?;

        let collection = self.collection_name().clone();
        let mut recovered = false;

        loop {
            match self
                .search_points(&collection, vector, SEARCH_LIMIT, SEARCH_PAYLOAD_FIELDS)
                .await
            {
                Err(StoreError::CollectionNotFound(_)) if !recovered => {
                    warn!("Collection '{}' missing on search, creating it", collection);
                    self.create_collection(&collection, self.dimension_count())
                        .await?;
                    recovered = true;
                }
                result => return result,
            }
        }
    }
}
