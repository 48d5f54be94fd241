#![allow(dead_code)]

/// In-memory stand-ins for the vector database and embedding provider
use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use vector_bridge::application::repositories::{StoreError, StoreResult, VectorStore};
use vector_bridge::application::services::{
    EmbeddingError, EmbeddingMode, EmbeddingProvider, EmbeddingProviderSelector,
    EmbeddingResult,
};
use vector_bridge::domain::{CollectionName, EmbeddingVector, Entity, Point, ScoredPoint};
use vector_bridge::infrastructure::http::{build_router, AppState};

/// Vector store keeping collections in memory and scoring by cosine similarity
pub struct InMemoryVectorStore {
    default_collection: CollectionName,
    dimension_count: usize,
    collections: Mutex<HashMap<String, Vec<Point>>>,
    pub create_calls: AtomicUsize,
}

impl InMemoryVectorStore {
    pub fn new(collection: &str, dimension_count: usize) -> Self {
        Self {
            default_collection: CollectionName::new(collection).unwrap(),
            dimension_count,
            collections: Mutex::new(HashMap::new()),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.lock().unwrap().contains_key(name)
    }

    pub fn point_count(&self, name: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(name)
            .map_or(0, |points| points.len())
    }

    pub fn stored_vector(&self, name: &str, id: &str) -> Option<Vec<f32>> {
        self.collections
            .lock()
            .unwrap()
            .get(name)?
            .iter()
            .find(|p| p.id().as_str() == id)
            .map(|p| p.vector().dimensions().to_vec())
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    fn collection_name(&self) -> &CollectionName {
        &self.default_collection
    }

    fn dimension_count(&self) -> usize {
        self.dimension_count
    }

    async fn try_create_collection(
        &self,
        name: &CollectionName,
        _dimension_count: usize,
    ) -> StoreResult<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut collections = self.collections.lock().unwrap();
        if collections.contains_key(name.as_str()) {
            return Err(StoreError::AlreadyExists(name.to_string()));
        }
        collections.insert(name.to_string(), Vec::new());
        Ok(())
    }

    async fn delete_collection(&self, name: &CollectionName) -> StoreResult<()> {
        self.collections
            .lock()
            .unwrap()
            .remove(name.as_str())
            .map(|_| ())
            .ok_or_else(|| StoreError::CollectionNotFound(name.to_string()))
    }

    async fn upsert_points(&self, collection: &CollectionName, points: Vec<Point>) -> StoreResult<()> {
        let mut collections = self.collections.lock().unwrap();
        let stored = collections
            .get_mut(collection.as_str())
            .ok_or_else(|| StoreError::CollectionNotFound(collection.to_string()))?;

        for point in points {
            stored.retain(|p| p.id() != point.id());
            stored.push(point);
        }
        Ok(())
    }

    async fn search_points(
        &self,
        collection: &CollectionName,
        vector: &EmbeddingVector,
        limit: u64,
        payload_fields: &[&str],
    ) -> StoreResult<Vec<ScoredPoint>> {
        let collections = self.collections.lock().unwrap();
        let stored = collections
            .get(collection.as_str())
            .ok_or_else(|| StoreError::CollectionNotFound(collection.to_string()))?;

        let mut results: Vec<ScoredPoint> = stored
            .iter()
            .map(|point| ScoredPoint {
                id: point.id().as_str().to_string(),
                score: cosine(point.vector().dimensions(), vector.dimensions()),
                payload: point
                    .payload()
                    .iter()
                    .filter(|(key, _)| payload_fields.contains(&key.as_str()))
                    .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
                    .collect(),
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(limit as usize);
        Ok(results)
    }
}

/// Deterministic bag-of-words embedder that counts its calls
pub struct BagOfWordsProvider {
    dimension_count: usize,
    calls: Arc<AtomicUsize>,
    fail: bool,
}

impl BagOfWordsProvider {
    pub fn new(dimension_count: usize, calls: Arc<AtomicUsize>) -> Self {
        Self {
            dimension_count,
            calls,
            fail: false,
        }
    }

    pub fn failing(dimension_count: usize, calls: Arc<AtomicUsize>) -> Self {
        Self {
            dimension_count,
            calls,
            fail: true,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for BagOfWordsProvider {
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(EmbeddingError::Status {
                status: 503,
                body: "model unavailable".to_string(),
            });
        }

        let mut vector = vec![0.01; self.dimension_count];
        for word in text.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            word.to_lowercase().hash(&mut hasher);
            vector[(hasher.finish() as usize) % self.dimension_count] += 1.0;
        }
        Ok(vector)
    }

    fn name(&self) -> &str {
        "bag-of-words"
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryVectorStore>,
    pub embed_calls: Arc<AtomicUsize>,
}

impl TestApp {
    pub fn embed_calls(&self) -> usize {
        self.embed_calls.load(Ordering::SeqCst)
    }
}

/// Router over an in-memory store whose embedder produces `embed_dims` values
pub fn test_app(store_dims: usize, embed_dims: usize) -> TestApp {
    build_test_app(store_dims, |calls| {
        Box::new(BagOfWordsProvider::new(embed_dims, calls))
    })
}

/// Router whose embedder always fails
pub fn failing_test_app(dims: usize) -> TestApp {
    build_test_app(dims, |calls| Box::new(BagOfWordsProvider::failing(dims, calls)))
}

fn build_test_app(
    dims: usize,
    provider: impl FnOnce(Arc<AtomicUsize>) -> Box<dyn EmbeddingProvider>,
) -> TestApp {
    let embed_calls = Arc::new(AtomicUsize::new(0));
    let selector = EmbeddingProviderSelector::new(EmbeddingMode::Local, provider(embed_calls.clone()));
    let store = Arc::new(InMemoryVectorStore::new("test_collection", dims));

    let state = AppState::new(Arc::new(selector), store.clone());
    TestApp {
        router: build_router(state),
        store,
        embed_calls,
    }
}
