//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use comuniapp_shared::AppError;
use serde::Serialize;
use serde_json::json;
use tracing::error;

/// Builds the `{ "error", "message" }` body for an application error.
pub fn error_response(err: &AppError) -> Response {
    with_details(err, None::<()>)
}

/// Same as [`error_response`] with a `fields` object describing what failed.
pub fn error_response_with_fields<T: Serialize>(err: &AppError, fields: T) -> Response {
    with_details(err, Some(fields))
}

fn with_details<T: Serialize>(err: &AppError, fields: Option<T>) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if !err.is_client_error() {
        error!(error = %err, "Request failed");
        return (
            status,
            Json(json!({
                "error": err.error_code(),
                "message": "An error occurred"
            })),
        )
            .into_response();
    }

    let mut body = json!({
        "error": err.error_code(),
        "message": err.to_string(),
    });
    if let Some(fields) = fields {
        body["fields"] = json!(fields);
    }

    (status, Json(body)).into_response()
}
