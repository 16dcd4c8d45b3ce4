//! OpenAI-compatible chat completions backend

use std::time::Duration;

use serde::Deserialize;

use super::{ProviderError, TextProvider};
use crate::error::BlogError;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Blocking client for `POST {base_url}/chat/completions`
pub struct OpenAiProvider {
    api_key: String,
    base_url: String,
    agent: ureq::Agent,
}

impl OpenAiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            agent: build_agent(DEFAULT_TIMEOUT),
        }
    }

    /// Read `OPENAI_API_KEY` from the environment
    pub fn from_env() -> Result<Self, BlogError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(BlogError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = build_agent(timeout);
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

fn build_agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new().timeout(timeout).build()
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl TextProvider for OpenAiProvider {
    fn send(&self, model: &str, system: &str, user: &str) -> Result<String, ProviderError> {
        let body = serde_json::json!({
            "model": model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user}
            ]
        });

        tracing::debug!(model, endpoint = %self.endpoint(), "sending chat completion request");
        let response = self
            .agent
            .post(&self.endpoint())
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body);

        match response {
            Ok(response) => {
                let parsed: ChatResponse = response
                    .into_json()
                    .map_err(|e| ProviderError::Other(format!("Failed to parse response: {}", e)))?;
                extract_content(parsed)
            }
            Err(ureq::Error::Status(code, response)) => {
                let detail = response.into_string().unwrap_or_default();
                Err(classify_status(code, &detail))
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(ProviderError::Other(format!("Request failed: {}", transport)))
            }
        }
    }
}

fn extract_content(response: ChatResponse) -> Result<String, ProviderError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| ProviderError::Other("Provider returned no choices".to_string()))
}

/// Map an HTTP error status onto the provider error taxonomy
fn classify_status(code: u16, detail: &str) -> ProviderError {
    let detail: String = detail.chars().take(500).collect();
    match code {
        401 | 403 => ProviderError::Auth(format!("HTTP {}: {}", code, detail)),
        429 => ProviderError::RateLimited(format!("HTTP {}: {}", code, detail)),
        _ => ProviderError::Other(format!("HTTP {}: {}", code, detail)),
    }
}
