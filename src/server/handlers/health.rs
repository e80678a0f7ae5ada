use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::server::app::AppState;

/// Healthy only while the document can be loaded from the configured store.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let storage = state.app.storage_description();

    match state.app.snapshot().await {
        Ok(doc) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "service": "todoql",
                "version": env!("CARGO_PKG_VERSION"),
                "storage": storage,
                "users": doc.users.len(),
                "todos": doc.todos.len(),
            })),
        ),
        Err(err) => {
            tracing::warn!("Health check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "service": "todoql",
                    "version": env!("CARGO_PKG_VERSION"),
                    "storage": storage,
                    "error": err.message(),
                })),
            )
        }
    }
}
