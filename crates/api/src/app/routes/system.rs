use axum::{response::IntoResponse, Json};
use chrono::Utc;

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Stock PO Management API" }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
