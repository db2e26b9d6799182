//! Assistant worker thread
//!
//! Runs completion calls on a background thread so the UI keeps drawing while
//! a request is in flight. Requests are handled one at a time, in the order
//! they were sent; there is no cancellation and no timeout.

use std::sync::mpsc::{Receiver, Sender};

use super::AiError;
use super::client::CompletionClient;
use crate::chat::ChatMessage;

/// Request messages sent to the worker thread
#[derive(Debug)]
pub enum AssistantRequest {
    /// Send the given history to the completion endpoint
    Complete {
        request_id: u64,
        messages: Vec<ChatMessage>,
    },
}

/// Response messages received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantResponse {
    Reply { request_id: u64, text: String },
    Failed { request_id: u64, error: AiError },
}

impl AssistantResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            AssistantResponse::Reply { request_id, .. } => *request_id,
            AssistantResponse::Failed { request_id, .. } => *request_id,
        }
    }

    pub fn into_result(self) -> Result<String, AiError> {
        match self {
            AssistantResponse::Reply { text, .. } => Ok(text),
            AssistantResponse::Failed { error, .. } => Err(error),
        }
    }
}

/// Spawn the assistant worker thread
///
/// An invalid endpoint does not prevent the worker from starting: each
/// request is then answered with the configuration error instead.
pub fn spawn_worker(
    endpoint: &str,
    request_rx: Receiver<AssistantRequest>,
    response_tx: Sender<AssistantResponse>,
) -> std::thread::JoinHandle<()> {
    let client_result = CompletionClient::new(endpoint);

    std::thread::spawn(move || {
        worker_loop(client_result, request_rx, response_tx);
    })
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client_result: Result<CompletionClient, AiError>,
    request_rx: Receiver<AssistantRequest>,
    response_tx: Sender<AssistantResponse>,
) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build();

    let backend = match (client_result, runtime) {
        (Ok(client), Ok(runtime)) => Ok((client, runtime)),
        (Err(e), _) => {
            log::debug!("Assistant not configured: {}", e);
            Err(e)
        }
        (_, Err(e)) => {
            log::error!("Failed to start assistant runtime: {}", e);
            Err(AiError::NotConfigured(format!(
                "could not start async runtime: {}",
                e
            )))
        }
    };

    while let Ok(request) = request_rx.recv() {
        let AssistantRequest::Complete {
            request_id,
            messages,
        } = request;

        log::debug!(
            "Completion request {} with {} messages",
            request_id,
            messages.len()
        );

        let result = match &backend {
            Ok((client, runtime)) => runtime.block_on(client.complete(&messages)),
            Err(e) => Err(e.clone()),
        };

        let response = match result {
            Ok(text) => AssistantResponse::Reply { request_id, text },
            Err(error) => AssistantResponse::Failed { request_id, error },
        };

        if response_tx.send(response).is_err() {
            // UI side hung up
            break;
        }
    }

    log::debug!("Assistant worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
