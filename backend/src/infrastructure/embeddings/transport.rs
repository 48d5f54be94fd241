/// Shared JSON-over-HTTP plumbing for the remote embedding providers
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::application::services::{EmbeddingError, EmbeddingResult};

/// Send `body` as JSON and decode a JSON reply.
///
/// Non-2xx replies become `EmbeddingError::Status` with the body preserved.
pub(crate) async fn post_json<B, R>(request: RequestBuilder, body: &B) -> EmbeddingResult<R>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = request.json(body).send().await?;
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        warn!("Embedding provider responded with {}", status);
        return Err(EmbeddingError::Status {
            status: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(|e| EmbeddingError::MalformedResponse(e.to_string()))
}
