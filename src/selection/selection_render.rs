use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::selection_state::SelectionSet;
use crate::widgets::text::truncate_to_width;

pub const EMPTY_SELECTION_TEXT: &str = "No products selected yet";

/// Build one tag line per selected product
pub fn build_tag_lines(
    selection: &SelectionSet,
    cursor: Option<usize>,
    max_width: u16,
) -> Vec<Line<'static>> {
    if selection.is_empty() {
        return vec![Line::from(Span::styled(
            EMPTY_SELECTION_TEXT,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    // "• " prefix and " ×" suffix
    let name_width = (max_width as usize).saturating_sub(4);

    selection
        .list()
        .iter()
        .enumerate()
        .map(|(i, product)| {
            let name = truncate_to_width(&product.name, name_width);
            let style = if cursor == Some(i) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Magenta)),
                Span::styled(name, style),
                Span::styled(" ×", Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect()
}

/// Render the selected-products tag list
pub fn render_selection(
    frame: &mut Frame,
    area: Rect,
    selection: &SelectionSet,
    cursor: usize,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let title = format!(" Selected Products ({}) ", selection.len());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(Line::from(" Ctrl+G: Generate Routine ").right_aligned())
        .border_style(Style::default().fg(border_color));

    let highlighted = if focused { Some(cursor) } else { None };
    let lines = build_tag_lines(selection, highlighted, area.width.saturating_sub(2));

    // Keep the cursor row visible
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = (cursor + 1).saturating_sub(inner_height) as u16;

    let content = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(content, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{product, render_widget_to_string};

    #[test]
    fn test_empty_selection_text() {
        let lines = build_tag_lines(&SelectionSet::new(), None, 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), EMPTY_SELECTION_TEXT);
    }

    #[test]
    fn test_one_tag_per_product_in_order() {
        let mut selection = SelectionSet::new();
        selection.toggle(&product(2, "Toner"));
        selection.toggle(&product(1, "Cleanser"));

        let lines = build_tag_lines(&selection, None, 40);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text, vec!["• Toner ×", "• Cleanser ×"]);
    }

    #[test]
    fn test_long_names_are_truncated() {
        let mut selection = SelectionSet::new();
        selection.toggle(&product(1, "Ultra Facial Overnight Moisturizing Cream"));

        let lines = build_tag_lines(&selection, None, 14);
        assert_eq!(lines[0].to_string(), "• Ultra Fac… ×");
    }

    #[test]
    fn test_render_shows_count_and_generate_hint() {
        let mut selection = SelectionSet::new();
        selection.toggle(&product(1, "Cleanser"));

        let output = render_widget_to_string(50, 6, |frame| {
            render_selection(frame, frame.area(), &selection, 0, true);
        });

        assert!(output.contains("Selected Products (1)"));
        assert!(output.contains("• Cleanser ×"));
        assert!(output.contains("Ctrl+G: Generate Routine"));
    }
}
