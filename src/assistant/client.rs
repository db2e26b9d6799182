//! HTTP client for the completion proxy
//!
//! POSTs `{"messages": [...]}` and reads the reply from
//! `choices[0].message.content`. Non-2xx responses are hard failures.

use super::AiError;
use crate::chat::ChatMessage;

#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CompletionClient {
    /// Create a client for the given endpoint
    ///
    /// Returns `AiError::NotConfigured` if the endpoint is blank or not a URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, AiError> {
        let endpoint = endpoint.into().trim().to_string();
        if endpoint.is_empty() {
            return Err(AiError::NotConfigured(
                "Missing endpoint in [assistant] config".to_string(),
            ));
        }

        reqwest::Url::parse(&endpoint).map_err(|e| {
            AiError::NotConfigured(format!("Invalid endpoint '{}': {}", endpoint, e))
        })?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AiError::NotConfigured(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_request_body(messages: &[ChatMessage]) -> serde_json::Value {
        serde_json::json!({ "messages": messages })
    }

    /// Send the full history and return the assistant reply text
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AiError> {
        let body = Self::build_request_body(messages);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AiError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        extract_reply(&text)
    }
}

/// Pull `choices[0].message.content` out of a completion response body
pub fn extract_reply(body: &str) -> Result<String, AiError> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AiError::Parse(e.to_string()))?;

    json.get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| AiError::Parse("missing choices[0].message.content".to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
