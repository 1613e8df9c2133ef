use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::error;

use crate::{
    api::{
        error::ApiError,
        types::{HealthResponse, MentorRequest, MentorResponse, PdfRequest, YoutubeRequest},
        AppState,
    },
    prompts,
    studypack::{self, StudyPack, StudySource},
};

pub async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "StellarLearn API Server is running",
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "StellarLearn Mentor API is running",
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn mentor(
    State(state): State<AppState>,
    Json(payload): Json<MentorRequest>,
) -> Result<Json<MentorResponse>, ApiError> {
    let prompt = required_field(payload.prompt.as_deref(), "Message is required")?;

    let reply = state
        .infer
        .complete(&prompts::mentor(prompt))
        .await
        .map_err(|err| {
            error!("mentor error: {err:#}");
            ApiError::upstream("Failed to get response from AI", err)
        })?;

    Ok(Json(MentorResponse { reply }))
}

pub async fn pdf_notes(
    State(state): State<AppState>,
    Json(payload): Json<PdfRequest>,
) -> Result<Json<StudyPack>, ApiError> {
    let text = required_field(payload.text.as_deref(), "Extracted PDF text is required")?;

    let source = StudySource::Document {
        text: text.to_string(),
    };
    let pack = studypack::generate(&state.infer, &source)
        .await
        .map_err(|err| {
            error!("pdf error: {err:#}");
            ApiError::upstream("Failed to generate notes", err)
        })?;

    Ok(Json(pack))
}

pub async fn youtube_notes(
    State(state): State<AppState>,
    Json(payload): Json<YoutubeRequest>,
) -> Result<Json<StudyPack>, ApiError> {
    let transcript = required_field(
        payload.transcript.as_deref(),
        "Transcript is required to generate notes",
    )?;

    let source = StudySource::Video {
        transcript: transcript.to_string(),
    };
    let pack = studypack::generate(&state.infer, &source)
        .await
        .map_err(|err| {
            error!("youtube error: {err:#}");
            ApiError::upstream("Failed to generate YouTube notes", err)
        })?;

    Ok(Json(pack))
}

pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "availableRoutes": ["/", "/api/health", "/api/mentor", "/api/pdf", "/api/youtube"]
        })),
    )
}

fn required_field<'a>(
    value: Option<&'a str>,
    message: &'static str,
) -> Result<&'a str, ApiError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::InvalidRequest(message)),
    }
}
