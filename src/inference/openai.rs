use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

/// Fixed persona attached to every completion the gateway issues.
const SYSTEM_PROMPT: &str = "You are Pixie, an educational AI assistant. For notes, return clean formatted text. For questions, return valid JSON array. Follow the user's instructions carefully.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Client for the upstream OpenAI-compatible chat-completion endpoint.
/// One POST per call, bounded by the configured timeout. No retry, no
/// streaming, no multi-turn state.
pub struct CompletionService {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl CompletionService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .context("failed to build upstream HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.upstream_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key),
            )
            .json(&request)
            .send()
            .await
            .context("failed to reach AI service")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("AI service returned {status}: {body}"));
        }

        let body: ChatResponse = response
            .json()
            .await
            .context("failed to parse AI service response")?;

        first_choice_content(body)
    }
}

fn first_choice_content(response: ChatResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| anyhow!("AI service response contained no choices"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_choice_content_returns_the_first_choice() {
        let response = ChatResponse {
            choices: vec![
                ChatChoice {
                    message: ChatChoiceMessage {
                        content: "first".into(),
                    },
                },
                ChatChoice {
                    message: ChatChoiceMessage {
                        content: "second".into(),
                    },
                },
            ],
        };
        assert_eq!(first_choice_content(response).unwrap(), "first");
    }

    #[test]
    fn first_choice_content_fails_on_empty_choices() {
        let response = ChatResponse { choices: vec![] };
        assert!(first_choice_content(response).is_err());
    }
}
