use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::inference::CompletionService;

pub mod error;
pub mod handlers;
pub mod types;

use handlers::{health, mentor, not_found, pdf_notes, root, youtube_notes};

#[derive(Clone)]
pub struct AppState {
    pub infer: Arc<CompletionService>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .route("/api/mentor", post(mentor))
        .route("/api/pdf", post(pdf_notes))
        .route("/api/youtube", post(youtube_notes))
        .fallback(not_found)
}
