use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stockpo_core::DomainError;
use stockpo_inventory::BatchId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_batch))
        .route("/:batch_id", get(get_batch).put(update_batch))
}

/// Unparseable ids cannot name an existing batch.
fn parse_batch_id(raw: &str) -> Result<BatchId, axum::response::Response> {
    raw.parse()
        .map_err(|_| errors::domain_error_to_response(DomainError::not_found("Batch not found")))
}

pub async fn create_batch(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::BatchRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.create_batch(body.into()) {
        Ok(batch) => (StatusCode::OK, Json(batch)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_batch(
    Extension(services): Extension<Arc<AppServices>>,
    Path(batch_id): Path<String>,
) -> axum::response::Response {
    let id = match parse_batch_id(&batch_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.get_batch(&id) {
        Ok(batch) => (StatusCode::OK, Json(batch)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_batch(
    Extension(services): Extension<Arc<AppServices>>,
    Path(batch_id): Path<String>,
    body: Result<Json<dto::BatchRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_batch_id(&batch_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.update_batch(&id, body.into()) {
        Ok(batch) => (StatusCode::OK, Json(batch)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
