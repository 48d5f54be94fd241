use serde::Serialize;

use crate::domain::ScoredPoint;

/// Query string of `GET /search`
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// The text to search for
    pub term: Option<String>,
}

impl SearchParams {
    /// Pick `term` out of decoded query pairs; the first occurrence wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let term = pairs
            .into_iter()
            .find(|(key, _)| key == "term")
            .map(|(_, value)| value);
        Self { term }
    }
}

/// One search hit as returned to HTTP clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPointResponse {
    pub id: String,
    /// Similarity score (higher is more similar)
    pub score: f32,
    /// Only the selected payload fields
    pub payload: serde_json::Map<String, serde_json::Value>,
}

impl From<ScoredPoint> for ScoredPointResponse {
    fn from(point: ScoredPoint) -> Self {
        Self {
            id: point.id,
            score: point.score,
            payload: point.payload,
        }
    }
}
