use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors surfaced to the HTTP caller. A questions output that fails to
/// parse is not one of these; it degrades to fallback content and the
/// request still succeeds.
#[derive(Debug)]
pub enum ApiError {
    /// A required request field was missing or empty. 400, never retried.
    InvalidRequest(&'static str),
    /// The completion service could not be reached or rejected the call.
    /// 500, with whatever diagnostic text the upstream provided.
    Upstream {
        message: &'static str,
        details: String,
    },
}

impl ApiError {
    pub fn upstream(message: &'static str, err: anyhow::Error) -> Self {
        ApiError::Upstream {
            message,
            details: format!("{err:#}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Upstream { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message, "details": details })),
            )
                .into_response(),
        }
    }
}
