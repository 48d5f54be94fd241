/// Qdrant vector store reached over gRPC
use anyhow::{Context, Result};
use async_trait::async_trait;
use qdrant_client::{
    qdrant::{
        point_id::PointIdOptions, with_payload_selector::SelectorOptions,
        CreateCollectionBuilder, Distance, PayloadIncludeSelector, PointId as QdrantPointId,
        PointStruct, SearchPoints, SearchPointsBuilder, UpsertPointsBuilder, VectorParamsBuilder,
    },
    Payload as QdrantPayload, Qdrant, QdrantError,
};
use tonic::Code;
use tracing::{debug, error, info};

use crate::application::repositories::{StoreError, StoreResult, VectorStore};
use crate::domain::{CollectionName, EmbeddingVector, Payload, Point, ScoredPoint};

/// Vector store implementation using Qdrant
pub struct QdrantVectorStore {
    client: Qdrant,
    collection_name: CollectionName,
    dimension_count: usize,
}

impl QdrantVectorStore {
    /// Connect to Qdrant and verify the server answers.
    ///
    /// The default collection is not created here; search creates it on
    /// first miss.
    ///
    /// # Arguments
    /// * `url` - Qdrant gRPC URL (e.g., "http://localhost:6334")
    /// * `api_key` - Optional Qdrant API key
    /// * `collection_name` - Default collection for search and batch inserts
    /// * `dimension_count` - Vector dimension count (1536 for text-embedding-ada-002)
    pub async fn connect(
        url: &str,
        api_key: Option<String>,
        collection_name: CollectionName,
        dimension_count: usize,
    ) -> Result<Self> {
        info!("Connecting to Qdrant at {}", url);

        let mut builder = Qdrant::from_url(url);
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        let client = builder.build().context("Failed to connect to Qdrant")?;

        client
            .health_check()
            .await
            .with_context(|| format!("Qdrant at {} is not reachable", url))?;

        info!(
            "Connected to Qdrant, default collection '{}' ({} dimensions)",
            collection_name, dimension_count
        );

        Ok(QdrantVectorStore {
            client,
            collection_name,
            dimension_count,
        })
    }
}

#[async_trait]
impl VectorStore for QdrantVectorStore {
    fn collection_name(&self) -> &CollectionName {
        &self.collection_name
    }

    fn dimension_count(&self) -> usize {
        self.dimension_count
    }

    async fn try_create_collection(
        &self,
        name: &CollectionName,
        dimension_count: usize,
    ) -> StoreResult<()> {
        self.client
            .create_collection(
                CreateCollectionBuilder::new(name.as_str()).vectors_config(
                    VectorParamsBuilder::new(dimension_count as u64, Distance::Cosine),
                ),
            )
            .await
            .map_err(|e| classify_error(e, name))?;

        Ok(())
    }

    async fn delete_collection(&self, name: &CollectionName) -> StoreResult<()> {
        let response = self
            .client
            .delete_collection(name.as_str())
            .await
            .map_err(|e| classify_error(e, name))?;

        // Older servers answer `result: false` instead of NOT_FOUND
        if !response.result {
            return Err(StoreError::CollectionNotFound(name.to_string()));
        }

        Ok(())
    }

    async fn upsert_points(
        &self,
        collection: &CollectionName,
        points: Vec<Point>,
    ) -> StoreResult<()> {
        debug!("Upserting {} points into '{}'", points.len(), collection);

        let points = points
            .into_iter()
            .map(to_point_struct)
            .collect::<StoreResult<Vec<_>>>()?;

        self.client
            .upsert_points(UpsertPointsBuilder::new(collection.as_str(), points).wait(true))
            .await
            .map_err(|e| {
                error!("Upsert into '{}' failed: {}", collection, e);
                classify_error(e, collection)
            })?;

        Ok(())
    }

    async fn search_points(
        &self,
        collection: &CollectionName,
        vector: &EmbeddingVector,
        limit: u64,
        payload_fields: &[&str],
    ) -> StoreResult<Vec<ScoredPoint>> {
        debug!("Searching '{}' with limit: {}", collection, limit);

        let search_result = self
            .client
            .search_points(search_request(collection, vector, limit, payload_fields))
            .await
            .map_err(|e| classify_error(e, collection))?;

        let results: Vec<ScoredPoint> = search_result
            .result
            .into_iter()
            .map(|point| ScoredPoint {
                id: point.id.map(point_id_to_string).unwrap_or_default(),
                score: point.score,
                payload: point
                    .payload
                    .into_iter()
                    .map(|(key, value)| (key, value.into_json()))
                    .collect(),
            })
            .collect();

        debug!("Found {} results", results.len());
        Ok(results)
    }
}

/// Nearest-neighbour request returning only `payload_fields` of each hit
fn search_request(
    collection: &CollectionName,
    vector: &EmbeddingVector,
    limit: u64,
    payload_fields: &[&str],
) -> SearchPoints {
    let selector = SelectorOptions::Include(PayloadIncludeSelector {
        fields: payload_fields.iter().map(|f| f.to_string()).collect(),
    });

    SearchPointsBuilder::new(collection.as_str(), vector.dimensions().to_vec(), limit)
        .with_payload(selector)
        .build()
}

fn to_point_struct(point: Point) -> StoreResult<PointStruct> {
    let (id, vector, payload) = point.into_parts();
    Ok(PointStruct::new(
        id.as_str().to_string(),
        vector.into_inner(),
        to_qdrant_payload(payload)?,
    ))
}

fn to_qdrant_payload(payload: Payload) -> StoreResult<QdrantPayload> {
    let object: serde_json::Map<String, serde_json::Value> = payload
        .into_iter()
        .map(|(key, value)| (key, serde_json::Value::String(value)))
        .collect();

    serde_json::Value::Object(object)
        .try_into()
        .map_err(|e| StoreError::Backend(format!("Failed to serialize payload: {}", e)))
}

fn point_id_to_string(id: QdrantPointId) -> String {
    match id.point_id_options {
        Some(PointIdOptions::Uuid(uuid)) => uuid,
        Some(PointIdOptions::Num(num)) => num.to_string(),
        None => String::new(),
    }
}

/// Map a Qdrant failure onto the store taxonomy by gRPC status code.
///
/// Qdrant reports an existing collection as INVALID_ARGUMENT, so that one
/// case also inspects the message.
fn classify_error(err: QdrantError, collection: &CollectionName) -> StoreError {
    match err {
        QdrantError::ResponseError { status } => match status.code() {
            Code::NotFound => StoreError::CollectionNotFound(collection.to_string()),
            Code::AlreadyExists => StoreError::AlreadyExists(collection.to_string()),
            Code::InvalidArgument if status.message().contains("already exists") => {
                StoreError::AlreadyExists(collection.to_string())
            }
            code => StoreError::Backend(format!("{:?}: {}", code, status.message())),
        },
        other => StoreError::Backend(other.to_string()),
    }
}

impl std::fmt::Debug for QdrantVectorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QdrantVectorStore")
            .field("collection_name", &self.collection_name)
            .field("dimension_count", &self.dimension_count)
            .finish()
    }
}
