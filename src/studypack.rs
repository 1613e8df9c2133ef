//! Normalization of the two-call notes/questions flow into a `StudyPack`.
//!
//! The questions call returns free text that should be a JSON array of
//! question objects. On parse failure the source-specific fallback pair is
//! substituted and the request still succeeds; a well-formed pack is always
//! returned.

use anyhow::Result;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::{inference::CompletionService, prompts};

/// Source material for a study pack request.
pub enum StudySource {
    Document { text: String },
    Video { transcript: String },
}

impl StudySource {
    fn notes_prompt(&self) -> String {
        match self {
            StudySource::Document { text } => prompts::document_notes(text),
            StudySource::Video { transcript } => prompts::video_notes(transcript),
        }
    }

    fn questions_prompt(&self) -> String {
        match self {
            StudySource::Document { text } => prompts::document_questions(text),
            StudySource::Video { transcript } => prompts::video_questions(transcript),
        }
    }

    fn fallback_questions(&self) -> Vec<Value> {
        match self {
            StudySource::Document { .. } => DOCUMENT_FALLBACK.clone(),
            StudySource::Video { .. } => VIDEO_FALLBACK.clone(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            StudySource::Document { .. } => "document",
            StudySource::Video { .. } => "video",
        }
    }
}

/// The normalized result: notes text plus a questions array. Question
/// elements are forwarded exactly as the model produced them, so they stay
/// raw JSON values instead of a typed struct.
#[derive(Debug, Serialize)]
pub struct StudyPack {
    pub notes: String,
    pub questions: Vec<Value>,
}

static DOCUMENT_FALLBACK: Lazy<Vec<Value>> = Lazy::new(|| {
    vec![
        json!({
            "question": "What are the main concepts covered in this material?",
            "type": "conceptual",
            "difficulty": "medium",
            "options": []
        }),
        json!({
            "question": "Explain the key takeaways from this content.",
            "type": "short-answer",
            "difficulty": "medium",
            "options": []
        }),
    ]
});

static VIDEO_FALLBACK: Lazy<Vec<Value>> = Lazy::new(|| {
    vec![
        json!({
            "question": "What are the key lessons from this video?",
            "type": "conceptual",
            "difficulty": "medium",
            "options": []
        }),
        json!({
            "question": "How can you apply the concepts from this video in practice?",
            "type": "short-answer",
            "difficulty": "medium",
            "options": []
        }),
    ]
});

/// Parse the questions output as a JSON array. Prose, fenced JSON and
/// non-array documents are parse errors; element shapes are not validated.
pub fn parse_questions(raw: &str) -> Result<Vec<Value>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Issue the notes and questions calls and assemble the pack. The two calls
/// are independent, so they run concurrently; if either fails the whole
/// operation fails and no partial pack is returned.
pub async fn generate(infer: &CompletionService, source: &StudySource) -> Result<StudyPack> {
    let notes_prompt = source.notes_prompt();
    let questions_prompt = source.questions_prompt();
    let (notes, raw_questions) = tokio::try_join!(
        infer.complete(&notes_prompt),
        infer.complete(&questions_prompt),
    )?;

    let questions = match parse_questions(&raw_questions) {
        Ok(questions) => questions,
        Err(err) => {
            warn!(
                source = source.kind(),
                %err,
                "questions output was not a JSON array; substituting fallback set"
            );
            source.fallback_questions()
        }
    };

    Ok(StudyPack { notes, questions })
}
