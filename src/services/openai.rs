use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors from the chat-completions API
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// One message in a chat transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: "assistant".to_string(), content: content.into() }
    }
}

/// Sampling parameters for a completion call
#[derive(Debug, Clone, Copy)]
pub struct ChatParams {
    pub temperature: f64,
    pub max_tokens: u32,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
}

impl ChatParams {
    /// Settings used for advisor conversations
    pub fn advisor() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1024,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
        }
    }

    /// Settings used for date-idea quotes: hotter sampling with
    /// repetition penalties so daily quotes stay varied
    pub fn quote() -> Self {
        Self {
            temperature: 0.9,
            max_tokens: 100,
            presence_penalty: 0.6,
            frequency_penalty: 0.6,
        }
    }
}

/// Client for an OpenAI-compatible chat-completions endpoint
pub struct ChatClient {
    endpoint: String,
    api_key: String,
    model: String,
    client: Client,
}

impl ChatClient {
    pub fn new(endpoint: String, api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { endpoint, api_key, model, client }
    }

    /// Run one completion over the given transcript and return the
    /// assistant's reply
    pub async fn chat(
        &self,
        messages: &[ChatMessage],
        params: ChatParams,
    ) -> Result<String, ChatError> {
        let payload = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
            "presence_penalty": params.presence_penalty,
            "frequency_penalty": params.frequency_penalty,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChatError::ApiError(format!(
                "chat API returned {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let content = json
            .get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .ok_or_else(|| ChatError::InvalidResponse("missing message content".into()))?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let msg = ChatMessage::system("hello");
        assert_eq!(msg.role, "system");
        assert_eq!(msg.content, "hello");
        assert_eq!(ChatMessage::user("x").role, "user");
        assert_eq!(ChatMessage::assistant("x").role, "assistant");
    }

    #[test]
    fn test_quote_params() {
        let params = ChatParams::quote();
        assert_eq!(params.max_tokens, 100);
        assert_eq!(params.presence_penalty, 0.6);
    }
}
