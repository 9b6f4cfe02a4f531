use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use compute::ComputeError;
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;
use validator::ValidationErrors;

use crate::report::RenderError;
use crate::schemas::ErrorResponse;
use crate::store::StoreError;

/// Failure surfaced by an HTTP handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Scenario not found: {0}")]
    NotFound(Uuid),
    #[error("Invalid scenario id: {0}")]
    InvalidId(String),
    #[error("Failed to access scenario storage: {0}")]
    Persistence(String),
    #[error("Failed to render report: {0}")]
    Render(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) | ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "SCENARIO_NOT_FOUND",
            ApiError::InvalidId(_) => "INVALID_SCENARIO_ID",
            ApiError::Persistence(_) => "PERSISTENCE_ERROR",
            ApiError::Render(_) => "RENDER_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            success: false,
        };
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::InvalidId(raw) => ApiError::InvalidId(raw),
            StoreError::OutOfRange(field) => {
                ApiError::Validation(format!("{field}: value cannot be stored"))
            }
            StoreError::Compute(e) => e.into(),
            other => ApiError::Persistence(other.to_string()),
        }
    }
}

impl From<ComputeError> for ApiError {
    fn from(err: ComputeError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        ApiError::Render(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}
