use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockpo_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        DomainError::Conflict(msg) => {
            tracing::warn!(%msg, "rejected conflicting request");
            json_error(StatusCode::BAD_REQUEST, "conflict", msg)
        }
        DomainError::Validation(msg) => {
            tracing::warn!(%msg, "rejected invalid request");
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
    }
}

/// Malformed or mistyped JSON body.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_request", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
