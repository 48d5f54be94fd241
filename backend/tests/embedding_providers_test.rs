/// HTTP embedding providers against throwaway local servers
use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use vector_bridge::application::services::{EmbeddingError, EmbeddingMode, EmbeddingProvider};
use vector_bridge::infrastructure::embeddings::{
    build_selector, EmbeddingConfig, LocalServerProvider, OllamaConfig, OllamaProvider,
    OpenAiConfig, OpenAiProvider,
};

/// Serve `router` on an ephemeral port and return its base URL
async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn fake_ollama(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["model"] != "nomic-embed-text" {
        return (StatusCode::NOT_FOUND, Json(json!({"error": "model not found"})));
    }
    let prompt_len = body["prompt"].as_str().unwrap_or_default().len() as f32;
    (StatusCode::OK, Json(json!({"embedding": [prompt_len, 1.0, 2.0]})))
}

async fn fake_local(Json(body): Json<Value>) -> Json<Value> {
    let words = body["text"].as_str().unwrap_or_default().split_whitespace().count() as f32;
    Json(json!({"vector": [words, 0.5]}))
}

async fn fake_openai(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer sk-test") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"message": "Incorrect API key provided"}})),
        );
    }
    if body["input"][0] == "nothing" {
        return (StatusCode::OK, Json(json!({"data": [], "model": body["model"]})));
    }
    (
        StatusCode::OK,
        Json(json!({
            "object": "list",
            "data": [
                {"object": "embedding", "index": 0, "embedding": [0.5, -0.25, 0.125]},
                {"object": "embedding", "index": 1, "embedding": [9.0, 9.0, 9.0]}
            ],
            "model": body["model"],
            "usage": {"prompt_tokens": 1, "total_tokens": 1}
        })),
    )
}

async fn broken_json() -> &'static str {
    "{\"embedding\": [1.0,"
}

async fn server_error() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

#[tokio::test]
async fn test_ollama_provider_sends_model_and_prompt() {
    let base = spawn(Router::new().route("/api/embeddings", post(fake_ollama))).await;

    let provider = OllamaProvider::new(OllamaConfig {
        url: format!("{}/api/embeddings", base),
        ..Default::default()
    });
    let embedding = provider.embed("hello").await.unwrap();
    assert_eq!(embedding, vec![5.0, 1.0, 2.0]);

    let provider = OllamaProvider::new(OllamaConfig {
        url: format!("{}/api/embeddings", base),
        model: "unknown-model".to_string(),
    });
    let result = provider.embed("hello").await;
    assert!(matches!(result, Err(EmbeddingError::Status { status: 404, .. })));
}

#[tokio::test]
async fn test_local_provider_reads_vector_field() {
    let base = spawn(Router::new().route("/embed", post(fake_local))).await;

    let provider = LocalServerProvider::new(format!("{}/embed", base));
    let embedding = provider.embed("one two three").await.unwrap();

    assert_eq!(embedding, vec![3.0, 0.5]);
}

#[tokio::test]
async fn test_openai_provider_takes_first_embedding() {
    let base = spawn(Router::new().route("/v1/embeddings", post(fake_openai))).await;

    let mut config = OpenAiConfig::new("sk-test");
    config.base_url = format!("{}/v1", base);
    let provider = OpenAiProvider::new(config).unwrap();

    let embedding = provider.embed("hello").await.unwrap();
    assert_eq!(embedding, vec![0.5, -0.25, 0.125]);

    let result = provider.embed("nothing").await;
    assert!(matches!(result, Err(EmbeddingError::EmptyResult)));
}

#[tokio::test]
async fn test_openai_provider_surfaces_auth_failure() {
    let base = spawn(Router::new().route("/v1/embeddings", post(fake_openai))).await;

    let mut config = OpenAiConfig::new("sk-wrong");
    config.base_url = format!("{}/v1", base);
    let provider = OpenAiProvider::new(config).unwrap();

    match provider.embed("hello").await {
        Err(EmbeddingError::Status { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Incorrect API key"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_and_failed_responses() {
    let base = spawn(
        Router::new()
            .route("/broken", post(broken_json))
            .route("/fail", post(server_error)),
    )
    .await;

    let provider = LocalServerProvider::new(format!("{}/broken", base));
    assert!(matches!(
        provider.embed("hi").await,
        Err(EmbeddingError::MalformedResponse(_))
    ));

    let provider = LocalServerProvider::new(format!("{}/fail", base));
    assert!(matches!(
        provider.embed("hi").await,
        Err(EmbeddingError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_unreachable_provider_is_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = LocalServerProvider::new(format!("http://{}/embed", addr));
    assert!(matches!(
        provider.embed("hi").await,
        Err(EmbeddingError::Request(_))
    ));
}

#[tokio::test]
async fn test_selector_built_from_config_uses_local_server() {
    let base = spawn(Router::new().route("/embed", post(fake_local))).await;

    let config = EmbeddingConfig {
        mode: EmbeddingMode::Local,
        local_url: format!("{}/embed", base),
        ..Default::default()
    };
    let selector = build_selector(&config).await.unwrap();

    let vector = selector.embed("a b").await.unwrap();
    assert_eq!(vector.dimensions(), &[2.0, 0.5]);
}
