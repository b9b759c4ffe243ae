use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

/// Validate requested quantities against the order and confirm the delivery.
/// Nothing is persisted and open quantities are left as they are.
pub async fn create_delivery(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateDeliveryRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.create_delivery(body.into_command(Utc::now())) {
        Ok(delivery) => (StatusCode::OK, Json(delivery)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
