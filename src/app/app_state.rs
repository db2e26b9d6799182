use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use ratatui::style::{Color, Style};
use tui_textarea::TextArea;

use crate::assistant::{AiError, AssistantRequest, AssistantResponse};
use crate::catalog::{CatalogLoader, Product, categories};
use crate::chat::{ChatSession, CompletionRequest, TopicFilter};
use crate::config::Config;
use crate::selection::SelectionSet;

/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Categories,
    Products,
    Selection,
    Chat,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Categories => Focus::Products,
            Focus::Products => Focus::Selection,
            Focus::Selection => Focus::Chat,
            Focus::Chat => Focus::Categories,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Categories => Focus::Chat,
            Focus::Products => Focus::Categories,
            Focus::Selection => Focus::Products,
            Focus::Chat => Focus::Selection,
        }
    }
}

/// Application state
pub struct App {
    pub loader: CatalogLoader,
    pub categories: Vec<String>,
    /// Index into `categories`, `None` until the user picks one
    pub category_index: Option<usize>,
    /// Products of the current category
    pub products: Vec<Product>,
    pub product_cursor: usize,
    pub selection: SelectionSet,
    pub selection_cursor: usize,
    pub session: ChatSession,
    pub input: TextArea<'static>,
    pub focus: Focus,
    /// Product shown in the details popup
    pub details: Option<Product>,
    /// Lines scrolled up from the newest chat entry
    pub chat_scroll: u16,
    pub notification: Option<String>,
    pub should_quit: bool,
    request_tx: Option<Sender<AssistantRequest>>,
    response_rx: Option<Receiver<AssistantResponse>>,
}

impl App {
    /// Create a new App from the startup catalog
    pub fn new(loader: CatalogLoader, products: &[Product], config: &Config) -> Self {
        let filter = TopicFilter::with_extra_keywords(&config.assistant.extra_keywords);

        let mut input = TextArea::default();
        input.set_cursor_line_style(Style::default());
        input.set_placeholder_text("Ask about your routine...");
        input.set_placeholder_style(Style::default().fg(Color::DarkGray));

        Self {
            loader,
            categories: categories(products),
            category_index: None,
            products: Vec::new(),
            product_cursor: 0,
            selection: SelectionSet::new(),
            selection_cursor: 0,
            session: ChatSession::new(filter),
            input,
            focus: Focus::default(),
            details: None,
            chat_scroll: 0,
            notification: None,
            should_quit: false,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Connect the app to the assistant worker
    pub fn set_channels(
        &mut self,
        request_tx: Sender<AssistantRequest>,
        response_rx: Receiver<AssistantResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current_category(&self) -> Option<&str> {
        self.category_index
            .and_then(|i| self.categories.get(i))
            .map(String::as_str)
    }

    /// Show a message in the status line until the next key press
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
    }

    /// Current chat input
    pub fn input_text(&self) -> String {
        self.input.lines().join("\n")
    }

    pub fn clear_input(&mut self) {
        self.input.select_all();
        self.input.cut();
    }

    /// Hand a completion request to the worker
    ///
    /// Without a live worker the request fails at once so the transcript
    /// never waits on a reply that cannot come.
    pub(super) fn send_request(&mut self, request: CompletionRequest) {
        let CompletionRequest {
            request_id,
            messages,
        } = request;

        let sent = match &self.request_tx {
            Some(tx) => tx
                .send(AssistantRequest::Complete {
                    request_id,
                    messages,
                })
                .is_ok(),
            None => false,
        };

        if !sent {
            log::warn!("Assistant worker unavailable for request {}", request_id);
            self.session.apply_completion(
                request_id,
                Err(AiError::NotConfigured(
                    "assistant worker is not running".to_string(),
                )),
            );
        }
    }

    /// Apply every completion the worker has delivered so far
    ///
    /// Returns true when at least one reply changed the transcript.
    pub fn poll_responses(&mut self) -> bool {
        let mut changed = false;
        let mut disconnected = false;

        if let Some(rx) = &self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => {
                        let request_id = response.request_id();
                        changed |= self
                            .session
                            .apply_completion(request_id, response.into_result());
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }

        if disconnected {
            log::error!("Assistant worker disconnected");
            self.response_rx = None;
            self.request_tx = None;
        }

        if changed {
            self.chat_scroll = 0;
        }
        changed
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
