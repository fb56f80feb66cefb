use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub mod forms;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An error occurred processing your request",
    )
}

fn error(code: StatusCode, error: &'static str) -> Response {
    (code, Json(ApiError { error })).into_response()
}
