use renegades_models::validation::ValidationErrors;
use serde::Serialize;

pub mod forms;

#[derive(Serialize)]
pub struct ApiError {
    pub error: &'static str,
}

#[derive(Serialize)]
pub struct ApiSuccess {
    pub success: bool,
}

#[derive(Serialize)]
pub struct ApiValidationErrors {
    pub error: &'static str,
    pub details: ValidationErrors,
}
