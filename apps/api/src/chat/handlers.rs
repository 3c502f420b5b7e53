//! Axum route handlers for the chat assistant.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chat::context::build_user_context;
use crate::chat::prompts::render_chat_prompt;
use crate::errors::AppError;
use crate::matching::analysis::AnalysisResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Absent is treated like blank and rejected by the handler.
    #[serde(default)]
    pub prompt: String,
    /// Result of a previous `/analyze` call, used as score context.
    #[serde(default)]
    pub analysis: Option<AnalysisResponse>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
}

/// POST /api/chat
///
/// Wraps the user's question in the assistant prompt and returns the model's
/// bullet-point reply.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let question = request.prompt.trim();
    if question.is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let context = build_user_context(question, request.analysis.as_ref());
    let prompt = render_chat_prompt(&context);

    let reply = state.responder.generate_reply(&prompt).await?;

    info!(
        with_analysis = request.analysis.is_some(),
        reply_chars = reply.len(),
        "Chat reply generated"
    );

    Ok(Json(ChatResponse {
        text: reply.trim().to_string(),
    }))
}
