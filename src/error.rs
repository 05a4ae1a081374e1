use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, info};

use crate::agents::PipelineError;

/// Custom error type for the application
#[derive(Debug)]
pub enum AppError {
    /// Classifier rejected the input
    NotATopic(String),
    MalformedResponse(String),
    Upstream(String),
}

/// Error response structure, shared by every route
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotATopic(msg) => {
                info!("Rejected input: {}", msg);
                (StatusCode::BAD_REQUEST, "NOT_A_TOPIC", msg)
            }
            AppError::MalformedResponse(msg) => {
                error!("Malformed provider response: {}", msg);
                (StatusCode::BAD_GATEWAY, "MALFORMED_RESPONSE", msg)
            }
            AppError::Upstream(msg) => {
                error!("Upstream error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_ERROR", msg)
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        let message = err.to_string();
        match err {
            PipelineError::Rejected(_) => AppError::NotATopic(message),
            PipelineError::MalformedResponse(_) => AppError::MalformedResponse(message),
            PipelineError::Upstream(_) => AppError::Upstream(message),
        }
    }
}

/// Result type for application handlers
pub type AppResult<T> = Result<T, AppError>;
