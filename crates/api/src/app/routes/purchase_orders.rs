use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockpo_purchasing::PurchaseOrderNumber;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/:po_number", get(get_purchase_order))
        .route("/:po_number/batches", get(list_purchase_order_batches))
}

pub async fn get_purchase_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(po_number): Path<String>,
) -> axum::response::Response {
    match services.purchase_order(&PurchaseOrderNumber::new(po_number)) {
        Ok(order) => (StatusCode::OK, Json(order)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_purchase_order_batches(
    Extension(services): Extension<Arc<AppServices>>,
    Path(po_number): Path<String>,
) -> axum::response::Response {
    match services.purchase_order_batches(&PurchaseOrderNumber::new(po_number)) {
        Ok(batches) => (StatusCode::OK, Json(batches)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
