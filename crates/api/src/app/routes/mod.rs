use axum::{
    routing::{get, post},
    Router,
};

pub mod batches;
pub mod deliveries;
pub mod purchase_orders;
pub mod system;

/// Router for every endpoint (mounted under `/api`).
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .nest("/po", purchase_orders::router())
        .nest("/batch", batches::router())
        .route("/delivery", post(deliveries::create_delivery))
}
