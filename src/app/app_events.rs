use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_commands::AppCommand;
use super::app_state::{App, Focus};

/// How long to wait for input before returning to poll the worker
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

const CHAT_SCROLL_STEP: u16 = 5;

impl App {
    /// Handle pending terminal events, waiting briefly for one to arrive
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(());
        }

        // Only key presses, to avoid duplicates on release
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            self.handle_key_event(key);
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.notification = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.dispatch(AppCommand::Quit);
            return;
        }

        // The details popup swallows every other key
        if self.details.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.dispatch(AppCommand::CloseDetails);
            }
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Categories => self.handle_categories_key(key),
            Focus::Products => self.handle_products_key(key),
            Focus::Selection => self.handle_selection_key(key),
            Focus::Chat => self.handle_chat_key(key),
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch(AppCommand::GenerateRoutine);
                true
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                true
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                true
            }
            KeyCode::Char('q') if self.focus != Focus::Chat => {
                self.dispatch(AppCommand::Quit);
                true
            }
            _ => false,
        }
    }

    fn handle_categories_key(&mut self, key: KeyEvent) {
        if self.categories.is_empty() {
            return;
        }
        let len = self.categories.len();

        let index = match key.code {
            KeyCode::Right | KeyCode::Char('l') => match self.category_index {
                Some(i) => (i + 1) % len,
                None => 0,
            },
            KeyCode::Left | KeyCode::Char('h') => match self.category_index {
                Some(i) => (i + len - 1) % len,
                None => len - 1,
            },
            KeyCode::Enter | KeyCode::Down => {
                if self.category_index.is_some() {
                    self.focus = Focus::Products;
                }
                return;
            }
            _ => return,
        };

        let category = self.categories[index].clone();
        self.dispatch(AppCommand::SelectCategory(category));
    }

    fn handle_products_key(&mut self, key: KeyEvent) {
        let current = self.products.get(self.product_cursor).map(|p| p.id);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.product_cursor = self.product_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.product_cursor + 1 < self.products.len() {
                    self.product_cursor += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = current {
                    self.dispatch(AppCommand::ToggleProduct(id));
                }
            }
            KeyCode::Char('i') => {
                if let Some(id) = current {
                    self.dispatch(AppCommand::ShowDetails(id));
                }
            }
            _ => {}
        }
    }

    fn handle_selection_key(&mut self, key: KeyEvent) {
        let current = self
            .selection
            .list()
            .get(self.selection_cursor)
            .map(|p| p.id);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selection_cursor = self.selection_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selection_cursor + 1 < self.selection.len() {
                    self.selection_cursor += 1;
                }
            }
            KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                if let Some(id) = current {
                    self.dispatch(AppCommand::RemoveSelected(id));
                }
            }
            KeyCode::Char('C') => self.dispatch(AppCommand::ClearSelection),
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let text = self.input_text();
                // Blank input stays in the box untouched
                if text.trim().is_empty() {
                    return;
                }
                self.clear_input();
                self.dispatch(AppCommand::SubmitQuestion(text));
            }
            KeyCode::PageUp => {
                self.chat_scroll = self.chat_scroll.saturating_add(CHAT_SCROLL_STEP);
            }
            KeyCode::PageDown => {
                self.chat_scroll = self.chat_scroll.saturating_sub(CHAT_SCROLL_STEP);
            }
            KeyCode::Esc => self.focus = Focus::Selection,
            _ => {
                self.input.input(key);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
