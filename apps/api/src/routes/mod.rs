pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::matching::handlers::handle_analyze;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analysis
        .route("/analyze", post(handle_analyze))
        // Chat assistant
        .route("/api/chat", post(handle_chat))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
