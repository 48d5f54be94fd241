/// HTTP surface of the bridge
mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::AppState;

use axum::{
    routing::{any, get, post},
    Router,
};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/search", any(handlers::search))
        .route(
            "/add",
            post(handlers::add_point).fallback(handlers::method_not_allowed),
        )
        .route(
            "/delete",
            post(handlers::delete_collection).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Starting HTTP server on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
