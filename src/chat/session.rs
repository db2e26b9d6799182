//! Conversation session gate
//!
//! Two states: `NoRoutine` rejects follow-up questions locally, `RoutineActive`
//! forwards on-topic questions with the full history. `RoutineActive` is only
//! entered when a routine-generation round trip succeeds.
//!
//! The session never performs I/O. Accepted actions return a
//! [`CompletionRequest`] for the caller to deliver; results come back through
//! [`ChatSession::apply_completion`].

use thiserror::Error;

use super::message::ChatMessage;
use super::prompt::routine_history;
use super::topic_filter::TopicFilter;
use super::transcript::{Speaker, Transcript};
use crate::assistant::AiError;
use crate::catalog::Product;

pub const EMPTY_SELECTION_MESSAGE: &str =
    "Please select at least one product to generate a routine.";
pub const ROUTINE_ERROR_MESSAGE: &str =
    "Sorry, there was an error generating your routine. Please try again.";
pub const NOT_READY_MESSAGE: &str = "Please select products and generate a routine first, then I'll be happy to answer your follow-up questions!";
pub const OFF_TOPIC_MESSAGE: &str = "I can only help with questions related to skincare, haircare, makeup, fragrance, and beauty routines. Please ask me something about your routine or beauty topics!";
pub const FOLLOW_UP_ERROR_MESSAGE: &str =
    "Sorry, I had trouble processing your question. Please try asking again.";
pub const ROUTINE_HEADER: &str = "🌟 Your Personalized Routine";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NoRoutine,
    RoutineActive,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{}", EMPTY_SELECTION_MESSAGE)]
    EmptySelection,
}

/// Outbound call the caller must deliver to the completion endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub request_id: u64,
    pub messages: Vec<ChatMessage>,
}

/// What happened to a submitted follow-up question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing changed
    Ignored,
    /// No routine yet, guidance shown
    NotReady,
    /// Failed the topical filter, refusal shown
    OffTopic,
    Forwarded(CompletionRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    Routine,
    FollowUp,
}

#[derive(Debug, Clone, Copy)]
struct PendingRequest {
    request_id: u64,
    kind: RequestKind,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    state: SessionState,
    history: Vec<ChatMessage>,
    transcript: Transcript,
    filter: TopicFilter,
    next_request_id: u64,
    /// Requests issued since the last routine generation started
    pending: Vec<PendingRequest>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(TopicFilter::new())
    }
}

impl ChatSession {
    pub fn new(filter: TopicFilter) -> Self {
        Self {
            state: SessionState::NoRoutine,
            history: Vec::new(),
            transcript: Transcript::new(),
            filter,
            next_request_id: 1,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_waiting(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Start a routine generation for the given selection
    ///
    /// Resets the history to the persona and routine prompt and drops back to
    /// `NoRoutine` until the reply arrives. An empty selection shows the
    /// validation notice and changes nothing else.
    pub fn generate_routine(
        &mut self,
        selection: &[Product],
    ) -> Result<CompletionRequest, SessionError> {
        if selection.is_empty() {
            self.transcript.replace_with_notice(EMPTY_SELECTION_MESSAGE);
            return Err(SessionError::EmptySelection);
        }

        self.state = SessionState::NoRoutine;
        self.history = routine_history(selection);
        self.pending.clear();
        self.transcript.show_generating();

        log::debug!("Generating routine for {} products", selection.len());

        Ok(self.track(RequestKind::Routine))
    }

    /// Gate a follow-up question
    pub fn submit_question(&mut self, input: &str) -> SubmitOutcome {
        let question = input.trim();
        if question.is_empty() {
            return SubmitOutcome::Ignored;
        }

        if self.state == SessionState::NoRoutine {
            self.transcript.push_message(Speaker::Ai, NOT_READY_MESSAGE);
            return SubmitOutcome::NotReady;
        }

        self.transcript.push_message(Speaker::You, question);

        if !self.filter.is_on_topic(question) {
            log::debug!("Rejected off-topic question");
            self.transcript.push_message(Speaker::Ai, OFF_TOPIC_MESSAGE);
            return SubmitOutcome::OffTopic;
        }

        self.history.push(ChatMessage::user(question));
        self.transcript.show_thinking();

        SubmitOutcome::Forwarded(self.track(RequestKind::FollowUp))
    }

    /// Apply the outcome of a completion call
    ///
    /// Returns false when the request is unknown, which includes requests
    /// issued before the latest routine generation started.
    pub fn apply_completion(&mut self, request_id: u64, result: Result<String, AiError>) -> bool {
        let Some(index) = self.pending.iter().position(|p| p.request_id == request_id) else {
            log::debug!("Dropping stale completion {}", request_id);
            return false;
        };
        let pending = self.pending.remove(index);

        match (pending.kind, result) {
            (RequestKind::Routine, Ok(reply)) => {
                self.history.push(ChatMessage::assistant(reply.as_str()));
                let text = format!("{}\n\n{}", ROUTINE_HEADER, reply);
                self.transcript.replace_with_message(Speaker::Ai, text);
                self.state = SessionState::RoutineActive;
                log::debug!("Routine generated, follow-up questions enabled");
            }
            (RequestKind::Routine, Err(e)) => {
                log::error!("Error generating routine: {}", e);
                self.transcript.replace_with_notice(ROUTINE_ERROR_MESSAGE);
            }
            (RequestKind::FollowUp, Ok(reply)) => {
                self.history.push(ChatMessage::assistant(reply.as_str()));
                self.finish_follow_up();
                self.transcript.push_message(Speaker::Ai, reply);
            }
            (RequestKind::FollowUp, Err(e)) => {
                log::error!("Error with follow-up question: {}", e);
                self.finish_follow_up();
                self.transcript.push_message(Speaker::Ai, FOLLOW_UP_ERROR_MESSAGE);
            }
        }

        true
    }

    fn finish_follow_up(&mut self) {
        if self.pending.is_empty() {
            self.transcript.clear_loading();
        }
    }

    fn track(&mut self, kind: RequestKind) -> CompletionRequest {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        self.pending.push(PendingRequest { request_id, kind });

        CompletionRequest {
            request_id,
            messages: self.history.clone(),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
