use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::gateway::GenerationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No questions generated.")]
    EmptyGeneration,

    /// Every provider failure is reported as a quota error, whatever the cause.
    #[error("Quota exceeded or API error: {0}")]
    Provider(String),

    #[error("{0}")]
    UnprocessableEntity(String),
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::EmptyGeneration => AppError::EmptyGeneration,
            GenerationError::Provider(msg) => AppError::Provider(msg),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyGeneration => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Provider(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::EmptyGeneration => tracing::error!("Generation error: {self}"),
            AppError::Provider(msg) => tracing::warn!("Provider error: {msg}"),
            AppError::UnprocessableEntity(msg) => tracing::warn!("Rejected request: {msg}"),
        }

        let body = Json(json!({ "detail": self.to_string() }));

        (status, body).into_response()
    }
}
