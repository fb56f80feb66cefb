use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use renegades_core_forms_contracts::{FormSubmitError, FormsFeatureService};

use super::{error, internal_server_error};
use crate::models::{
    forms::{ApiContactSubmission, ApiMembershipSubmission, ApiTryoutSubmission},
    ApiSuccess, ApiValidationErrors,
};

pub fn router(service: Arc<impl FormsFeatureService>) -> Router<()> {
    Router::new()
        .route(
            "/forms/contact",
            routing::any(method_not_allowed).post(submit_contact),
        )
        .route(
            "/forms/tryout",
            routing::any(method_not_allowed).post(submit_tryout),
        )
        .route(
            "/forms/membership",
            routing::any(method_not_allowed).post(submit_membership),
        )
        .with_state(service)
}

async fn submit_contact(
    service: State<Arc<impl FormsFeatureService>>,
    payload: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(_) => return error(StatusCode::BAD_REQUEST, "Invalid request body"),
    };
    let Some(message) = payload.message else {
        return error(StatusCode::BAD_REQUEST, "Missing message");
    };

    let (submission, token) = message.into_parts();
    match service.submit_contact(submission, token).await {
        Ok(()) => success(),
        Err(err) => submit_error(err),
    }
}

async fn submit_tryout(
    service: State<Arc<impl FormsFeatureService>>,
    payload: Result<Json<ApiTryoutSubmission>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(_) => return error(StatusCode::BAD_REQUEST, "Invalid request body"),
    };
    let Some(request) = payload.request else {
        return error(StatusCode::BAD_REQUEST, "Missing request body");
    };

    let (submission, token) = request.into_parts();
    match service.submit_tryout(submission, token).await {
        Ok(()) => success(),
        Err(err) => submit_error(err),
    }
}

async fn submit_membership(
    service: State<Arc<impl FormsFeatureService>>,
    payload: Result<Json<ApiMembershipSubmission>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(_) => return error(StatusCode::BAD_REQUEST, "Invalid request body"),
    };
    let Some(application) = payload.application else {
        return error(StatusCode::BAD_REQUEST, "Missing application body");
    };

    let (submission, token) = application.into_parts();
    match service.submit_membership(submission, token).await {
        Ok(()) => success(),
        Err(err) => submit_error(err),
    }
}

async fn method_not_allowed() -> Response {
    let mut response = error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("POST, OPTIONS"));
    response
}

fn success() -> Response {
    Json(ApiSuccess { success: true }).into_response()
}

fn submit_error(err: FormSubmitError) -> Response {
    match err {
        FormSubmitError::MissingToken => error(StatusCode::BAD_REQUEST, "Missing reCAPTCHA token"),
        FormSubmitError::VerificationFailed => {
            error(StatusCode::BAD_REQUEST, "reCAPTCHA verification failed")
        }
        FormSubmitError::Validation(details) => (
            StatusCode::BAD_REQUEST,
            Json(ApiValidationErrors {
                error: "Validation failed",
                details,
            }),
        )
            .into_response(),
        err @ FormSubmitError::Dispatch => internal_server_error(err),
        FormSubmitError::Other(err) => internal_server_error(err),
    }
}
