use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::error::ApiError;
use crate::application::dto::{
    AddPointRequest, AddPointResponse, DeleteCollectionRequest, ScoredPointResponse,
    SearchParams, StatusResponse,
};
use crate::application::repositories::VectorStore;
use crate::application::services::EmbeddingProviderSelector;
use crate::application::use_cases::{AddPoint, DeleteCollection, SearchSimilarPoints};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub embedder: Arc<EmbeddingProviderSelector>,
    pub store: Arc<dyn VectorStore>,
}

impl AppState {
    pub fn new(embedder: Arc<EmbeddingProviderSelector>, store: Arc<dyn VectorStore>) -> Self {
        Self { embedder, store }
    }
}

/// Bodies are parsed as JSON whatever their Content-Type says
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::BadRequest("Invalid request".to_string()))
}

/// Served for any method; repeated `term` keys resolve to the first one
#[tracing::instrument(skip(state, query))]
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<ScoredPointResponse>>, ApiError> {
    let Query(pairs) = query.map_err(|_| ApiError::BadRequest("Invalid request".to_string()))?;
    let params = SearchParams::from_pairs(pairs);
    tracing::debug!("Search term: {}", params.term.as_deref().unwrap_or(""));

    let results = SearchSimilarPoints::new(&state.embedder, state.store.as_ref())
        .execute(params.term.as_deref())
        .await?;

    Ok(Json(results.into_iter().map(ScoredPointResponse::from).collect()))
}

#[tracing::instrument(skip(state, body))]
pub async fn add_point(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AddPointResponse>, ApiError> {
    let request: AddPointRequest = parse_body(&body)?;

    let id = AddPoint::new(&state.embedder, state.store.as_ref())
        .execute(request)
        .await?;

    Ok(Json(AddPointResponse::ok(id.as_str())))
}

#[tracing::instrument(skip(state, body))]
pub async fn delete_collection(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StatusResponse>, ApiError> {
    let request: DeleteCollectionRequest = parse_body(&body)?;

    DeleteCollection::new(state.store.as_ref())
        .execute(request)
        .await?;

    Ok(Json(StatusResponse::ok()))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
