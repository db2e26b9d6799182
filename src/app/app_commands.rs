//! User intents and their effect on the app
//!
//! Key handling translates input into an `AppCommand`; `dispatch` is the
//! only place that touches the catalog, the selection and the chat session.

use crate::catalog::{ProductId, filter_by_category};
use crate::chat::SubmitOutcome;

use super::app_state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    SelectCategory(String),
    ToggleProduct(ProductId),
    RemoveSelected(ProductId),
    ClearSelection,
    ShowDetails(ProductId),
    CloseDetails,
    GenerateRoutine,
    SubmitQuestion(String),
    Quit,
}

impl App {
    pub fn dispatch(&mut self, command: AppCommand) {
        log::debug!("Dispatch {:?}", command);

        match command {
            AppCommand::SelectCategory(category) => self.select_category(&category),
            AppCommand::ToggleProduct(id) => {
                if let Some(product) = self.products.iter().find(|p| p.id == id) {
                    self.selection.toggle(product);
                }
            }
            AppCommand::RemoveSelected(id) => {
                self.selection.remove(id);
                self.clamp_selection_cursor();
            }
            AppCommand::ClearSelection => {
                self.selection.clear();
                self.selection_cursor = 0;
            }
            AppCommand::ShowDetails(id) => {
                self.details = self.products.iter().find(|p| p.id == id).cloned();
            }
            AppCommand::CloseDetails => self.details = None,
            AppCommand::GenerateRoutine => {
                self.chat_scroll = 0;
                if let Ok(request) = self.session.generate_routine(self.selection.list()) {
                    self.send_request(request);
                }
            }
            AppCommand::SubmitQuestion(question) => {
                self.chat_scroll = 0;
                if let SubmitOutcome::Forwarded(request) = self.session.submit_question(&question)
                {
                    self.send_request(request);
                }
            }
            AppCommand::Quit => self.should_quit = true,
        }
    }

    /// Re-read the catalog and show one category
    ///
    /// A failed read keeps the current grid and reports through the status
    /// line. The selection is never touched.
    fn select_category(&mut self, category: &str) {
        let products = match self.loader.load() {
            Ok(products) => products,
            Err(e) => {
                log::error!("Failed to reload catalog: {}", e);
                self.notify(e.to_string());
                return;
            }
        };

        self.category_index = self.categories.iter().position(|c| c == category);
        if self.category_index.is_none() {
            // Category introduced by an edit to the catalog since startup
            self.categories.push(category.to_string());
            self.category_index = Some(self.categories.len() - 1);
        }

        self.products = filter_by_category(products, category);
        self.product_cursor = 0;
    }

    fn clamp_selection_cursor(&mut self) {
        let len = self.selection.len();
        if self.selection_cursor >= len {
            self.selection_cursor = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
#[path = "app_commands_tests.rs"]
mod app_commands_tests;
