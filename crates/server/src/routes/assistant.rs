//! Virtual butcher endpoint.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::AssistantService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub reply: String,
}

/// `POST /assistant/ask`
///
/// One question, one answer. Model failures surface as a friendly fallback
/// reply rather than an error status.
#[instrument(skip(state, request))]
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("message must not be empty".to_owned()));
    }

    let service = AssistantService::new(state.store(), state.gemini());
    let reply = service.ask(message).await;
    Ok(Json(AskResponse { reply }))
}
