//! User-visible chat log
//!
//! Separate from the conversation history: the transcript holds what the
//! user sees (echoes, refusals, error notices), the history holds what the
//! model sees.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    You,
    Ai,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::You => "You",
            Speaker::Ai => "AI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    Message { speaker: Speaker, text: String },
    /// Inline notice without a speaker label (validation and generation errors)
    Notice(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingIndicator {
    /// Whole transcript replaced while a routine is generated
    Generating,
    /// Appended below the last entry while a follow-up is answered
    Thinking,
}

impl LoadingIndicator {
    pub fn text(&self) -> &'static str {
        match self {
            LoadingIndicator::Generating => "Generating your personalized routine...",
            LoadingIndicator::Thinking => "Thinking...",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    loading: Option<LoadingIndicator>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_message(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::Message {
            speaker,
            text: text.into(),
        });
    }

    /// Replace everything with a single notice
    pub fn replace_with_notice(&mut self, text: impl Into<String>) {
        self.entries.clear();
        self.loading = None;
        self.entries.push(TranscriptEntry::Notice(text.into()));
    }

    /// Replace everything with a single message
    pub fn replace_with_message(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.clear();
        self.loading = None;
        self.push_message(speaker, text);
    }

    /// Clear entries and show only the generation indicator
    pub fn show_generating(&mut self) {
        self.entries.clear();
        self.loading = Some(LoadingIndicator::Generating);
    }

    pub fn show_thinking(&mut self) {
        self.loading = Some(LoadingIndicator::Thinking);
    }

    pub fn clear_loading(&mut self) {
        self.loading = None;
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn loading(&self) -> Option<LoadingIndicator> {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.loading.is_none()
    }

    /// Text of the most recent entry, if any
    pub fn last_text(&self) -> Option<&str> {
        self.entries.last().map(|entry| match entry {
            TranscriptEntry::Message { text, .. } => text.as_str(),
            TranscriptEntry::Notice(text) => text.as_str(),
        })
    }
}
