use serde::{Deserialize, Serialize};

// Request fields are optional: a missing field must map to the 400 {error}
// body, not a deserialization rejection.

#[derive(Debug, Deserialize)]
pub struct MentorRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MentorResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct PdfRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct YoutubeRequest {
    #[serde(default)]
    pub transcript: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}
