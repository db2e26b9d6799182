//! Completion endpoint access
//!
//! Defines the AiError type, the HTTP client for the completion proxy, and the
//! background worker that keeps network calls off the UI thread.

use thiserror::Error;

mod client;
mod worker;

pub use client::{CompletionClient, extract_reply};
pub use worker::{AssistantRequest, AssistantResponse, spawn_worker};

/// Errors that can occur during a completion call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// Endpoint missing or invalid, or the worker could not start
    #[error("Assistant not configured: {0}")]
    NotConfigured(String),

    /// Transport failure before a status was received
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Body did not contain `choices[0].message.content`
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_error_display() {
        assert_eq!(
            AiError::NotConfigured("empty endpoint".to_string()).to_string(),
            "Assistant not configured: empty endpoint"
        );
        assert_eq!(
            AiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            AiError::Api {
                code: 502,
                message: "bad gateway".to_string()
            }
            .to_string(),
            "API error (502): bad gateway"
        );
        assert_eq!(
            AiError::Parse("missing choices".to_string()).to_string(),
            "Parse error: missing choices"
        );
    }
}
