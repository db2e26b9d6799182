//! Conversation with the routine assistant
//!
//! History, the topical gate, prompt construction and the visible transcript.

mod chat_render;
mod message;
mod prompt;
mod session;
mod topic_filter;
mod transcript;

pub use chat_render::{build_transcript_lines, max_chat_scroll, render_chat};
pub use message::{ChatMessage, Role};
pub use prompt::{SYSTEM_PERSONA, build_routine_prompt, products_payload};
pub use session::{
    ChatSession, CompletionRequest, EMPTY_SELECTION_MESSAGE, FOLLOW_UP_ERROR_MESSAGE,
    NOT_READY_MESSAGE, OFF_TOPIC_MESSAGE, ROUTINE_ERROR_MESSAGE, SessionError, SessionState,
    SubmitOutcome,
};
pub use topic_filter::TopicFilter;
pub use transcript::{LoadingIndicator, Speaker, Transcript, TranscriptEntry};
