//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::prompts::build_question_prompt;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub questions: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate
///
/// Builds the question prompt for the role and returns the model's text as-is.
/// Empty completion → 500. Any provider failure → 429.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::UnprocessableEntity(e.body_text()))?;

    let span = info_span!(
        "generate",
        request_id = %Uuid::new_v4(),
        role_len = request.role.len()
    );

    async move {
        let prompt = build_question_prompt(&request.role);
        let questions = state.gateway.generate(prompt).await?;
        info!("Generated {} bytes of questions", questions.len());
        Ok::<_, AppError>(Json(GenerateResponse { questions }))
    }
    .instrument(span)
    .await
}
