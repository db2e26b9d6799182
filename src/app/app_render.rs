use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::app_state::{App, Focus};
use crate::chat::{max_chat_scroll, render_chat};
use crate::selection::render_selection;
use crate::widgets::popup::{centered_popup_percent, clear_area};
use crate::widgets::text::truncate_to_width;

pub const NO_CATEGORY_TEXT: &str = "Select a category to view products";
pub const EMPTY_CATEGORY_TEXT: &str = "No products in this category";
pub const NO_DESCRIPTION_TEXT: &str = "No description available for this product.";

const SELECTION_HEIGHT: u16 = 8;

fn border_style(focused: bool) -> Style {
    Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray })
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [tabs_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body_area);

        let [products_area, selection_area] = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(SELECTION_HEIGHT),
        ])
        .areas(left_area);

        let [chat_area, input_area] =
            Layout::vertical([Constraint::Min(5), Constraint::Length(3)]).areas(right_area);

        self.render_categories(frame, tabs_area);
        self.render_products(frame, products_area);
        render_selection(
            frame,
            selection_area,
            &self.selection,
            self.selection_cursor,
            self.focus == Focus::Selection,
        );
        // Never scroll above the first transcript line
        self.chat_scroll = self
            .chat_scroll
            .min(max_chat_scroll(&self.session, chat_area));
        render_chat(
            frame,
            chat_area,
            &self.session,
            self.focus == Focus::Chat,
            self.chat_scroll,
        );
        self.render_input(frame, input_area);
        self.render_status_line(frame, status_area);

        if self.details.is_some() {
            self.render_details_popup(frame);
        }
    }

    fn render_categories(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Categories ")
            .border_style(border_style(self.focus == Focus::Categories));

        // Tabs always highlights something, so mute it until a pick is made
        let highlight = match self.category_index {
            Some(_) => Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            None => Style::default(),
        };

        let tabs = Tabs::new(self.categories.iter().map(|c| c.to_string()))
            .block(block)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(highlight)
            .select(self.category_index.unwrap_or(0))
            .divider("│");

        frame.render_widget(tabs, area);
    }

    fn render_products(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Products;
        let title = match self.current_category() {
            Some(category) => format!(" Products · {} ", category),
            None => " Products ".to_string(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(Line::from(" Space: select · i: details ").right_aligned())
            .border_style(border_style(focused));

        let placeholder = match self.category_index {
            None => Some(NO_CATEGORY_TEXT),
            Some(_) if self.products.is_empty() => Some(EMPTY_CATEGORY_TEXT),
            Some(_) => None,
        };

        if let Some(text) = placeholder {
            let content = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
                .block(block);
            frame.render_widget(content, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let inner_height = area.height.saturating_sub(2) as usize;
        let lines = self.build_product_lines(inner_width, focused);

        let scroll = (self.product_cursor + 1).saturating_sub(inner_height) as u16;
        let content = Paragraph::new(lines).block(block).scroll((scroll, 0));
        frame.render_widget(content, area);
    }

    /// One row per product: check mark, padded name, brand
    fn build_product_lines(&self, width: usize, focused: bool) -> Vec<Line<'static>> {
        // "[✓] " prefix and two spaces between columns
        let available = width.saturating_sub(6);
        let longest = self
            .products
            .iter()
            .map(|p| p.name.width())
            .max()
            .unwrap_or(0);
        let name_width = longest.min(available * 3 / 5);
        let brand_width = available.saturating_sub(name_width);

        self.products
            .iter()
            .enumerate()
            .map(|(i, product)| {
                let selected = self.selection.contains(product.id);
                let under_cursor = focused && i == self.product_cursor;

                let mark = if selected { "[✓] " } else { "[ ] " };
                let name = truncate_to_width(&product.name, name_width);
                let padding = " ".repeat(name_width.saturating_sub(name.width()) + 2);
                let brand = truncate_to_width(&product.brand, brand_width);

                let mut name_style = if selected {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                if under_cursor {
                    name_style = name_style.add_modifier(Modifier::REVERSED);
                }

                Line::from(vec![
                    Span::styled(mark, Style::default().fg(Color::Green)),
                    Span::styled(name, name_style),
                    Span::raw(padding),
                    Span::styled(brand, Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect()
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Chat;
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Ask a follow-up ")
                .border_style(border_style(focused)),
        );
        self.input.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });

        frame.render_widget(&self.input, area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.notification {
            Some(message) => Line::from(Span::styled(
                format!(" {} ", message),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(
                self.key_hints(),
                Style::default().fg(Color::DarkGray),
            )),
        };

        frame.render_widget(Paragraph::new(line), area);
    }

    fn key_hints(&self) -> &'static str {
        if self.details.is_some() {
            return " Esc: close";
        }
        match self.focus {
            Focus::Categories => " ←/→: category · Tab: next pane · Ctrl+G: generate · q: quit",
            Focus::Products => {
                " ↑/↓: move · Space: select · i: details · Ctrl+G: generate · q: quit"
            }
            Focus::Selection => " ↑/↓: move · x: remove · C: clear all · Ctrl+G: generate",
            Focus::Chat => " Enter: send · PgUp/PgDn: scroll · Tab: next pane · Ctrl+C: quit",
        }
    }

    fn render_details_popup(&self, frame: &mut Frame) {
        let Some(product) = &self.details else {
            return;
        };

        let area = centered_popup_percent(frame.area(), 60, 50, 40, 10);
        clear_area(frame, area);

        let description = product
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION_TEXT);

        let lines = vec![
            Line::from(Span::styled(
                product.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                product.brand.clone(),
                Style::default().fg(Color::Magenta),
            )),
            Line::from(vec![
                Span::styled("Image: ", Style::default().fg(Color::DarkGray)),
                Span::styled(product.image.clone(), Style::default().fg(Color::Gray)),
            ]),
            Line::from(""),
            Line::from(description.to_string()),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Product Details ")
            .title_bottom(Line::from(" Esc: close ").right_aligned())
            .border_style(Style::default().fg(Color::Cyan));

        let content = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(content, area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
