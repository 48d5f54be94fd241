/// Domain entities
use super::base::Entity;
use super::value_objects::{EmbeddingVector, Payload, PointId};

/// A Point is one stored vector plus its identifier and metadata.
/// Points are immutable once built; there is no update operation.
#[derive(Debug, Clone)]
pub struct Point {
    id: PointId,
    vector: EmbeddingVector,
    payload: Payload,
}

impl Point {
    pub fn new(id: PointId, vector: EmbeddingVector, payload: Payload) -> Self {
        Point {
            id,
            vector,
            payload,
        }
    }

    /// Get the point's vector
    pub fn vector(&self) -> &EmbeddingVector {
        &self.vector
    }

    /// Get the point's payload
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_parts(self) -> (PointId, EmbeddingVector, Payload) {
        (self.id, self.vector, self.payload)
    }
}

impl Entity for Point {
    type Id = PointId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A search hit: a stored point id, its similarity score and the selected payload fields
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPoint {
    pub id: String,
    pub score: f32,
    pub payload: serde_json::Map<String, serde_json::Value>,
}
