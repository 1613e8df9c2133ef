use anyhow::{Context, Result};

/// Endpoint the original deployment talks to; any OpenAI-compatible
/// chat-completion host works.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.chatanywhere.com.cn/v1/chat/completions";

/// Read once at startup, immutable afterwards. Handlers never touch the
/// environment directly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub port: u16,
    pub upstream_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub upstream_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let openai_api_key = dotenvy::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .context("OPENAI_API_KEY is missing from environment variables")?;

        let port = match dotenvy::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => 5000,
        };

        let upstream_url =
            dotenvy::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        let model = dotenvy::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());

        Ok(Self {
            openai_api_key,
            port,
            upstream_url,
            model,
            max_tokens: 1200,
            temperature: 0.7,
            upstream_timeout_secs: 30,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other.
    #[test]
    fn from_env_requires_the_api_key_and_fills_defaults() {
        std::env::remove_var("OPENAI_API_KEY");
        assert!(AppConfig::from_env().is_err());

        std::env::set_var("OPENAI_API_KEY", "sk-test");
        std::env::remove_var("PORT");
        std::env::remove_var("OPENAI_API_URL");
        std::env::remove_var("OPENAI_MODEL");

        let config = AppConfig::from_env().expect("config should load once the key is set");
        assert_eq!(config.port, 5000);
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.upstream_timeout_secs, 30);

        std::env::set_var("PORT", "not-a-port");
        assert!(AppConfig::from_env().is_err());

        std::env::remove_var("PORT");
        std::env::remove_var("OPENAI_API_KEY");
    }
}
