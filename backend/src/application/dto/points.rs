use serde::{Deserialize, Serialize};

use crate::domain::Payload;

/// Body of `POST /add`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddPointRequest {
    /// Text to embed when no usable vector is given
    #[serde(default)]
    pub text: Option<String>,
    /// Explicit vector; wins over `text` when it has the configured length
    #[serde(default)]
    pub vector: Option<Vec<f32>>,
    #[serde(default)]
    pub payload: Option<Payload>,
}

/// Body of `POST /delete`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteCollectionRequest {
    #[serde(default)]
    pub collection: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddPointResponse {
    pub id: String,
    pub status: String,
}

impl AddPointResponse {
    pub fn ok(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
