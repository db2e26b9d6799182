//! Chat panel rendering
//!
//! Lines are wrapped up front so the panel can pin the newest entry to the
//! bottom edge.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::session::{ChatSession, SessionState};
use super::transcript::{Speaker, Transcript, TranscriptEntry};
use crate::widgets::text::wrap_text;

const EMPTY_HINT: &str = "Select products, then press Ctrl+G to generate your routine.";

fn speaker_style(speaker: Speaker) -> Style {
    match speaker {
        Speaker::You => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Speaker::Ai => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    }
}

/// Build the wrapped lines for a transcript
pub fn build_transcript_lines(transcript: &Transcript, max_width: u16) -> Vec<Line<'static>> {
    let width = max_width as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    if transcript.is_empty() {
        for line in wrap_text(EMPTY_HINT, width) {
            lines.push(Line::from(Span::styled(
                line,
                Style::default().fg(Color::DarkGray),
            )));
        }
        return lines;
    }

    for (i, entry) in transcript.entries().iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        match entry {
            TranscriptEntry::Message { speaker, text } => {
                lines.push(Line::from(Span::styled(
                    format!("{}:", speaker.label()),
                    speaker_style(*speaker),
                )));
                for line in wrap_text(text, width) {
                    lines.push(Line::from(line));
                }
            }
            TranscriptEntry::Notice(text) => {
                for line in wrap_text(text, width) {
                    lines.push(Line::from(Span::styled(
                        line,
                        Style::default().fg(Color::LightRed),
                    )));
                }
            }
        }
    }

    if let Some(indicator) = transcript.loading() {
        if !transcript.entries().is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled("◌ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                indicator.text(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    lines
}

/// Scroll offset that shows the newest line at the bottom edge
fn bottom_scroll(line_count: usize, area: Rect) -> u16 {
    let total = u16::try_from(line_count).unwrap_or(u16::MAX);
    total.saturating_sub(area.height.saturating_sub(2))
}

/// Largest useful `scroll_from_bottom` for the chat panel at this size
pub fn max_chat_scroll(session: &ChatSession, area: Rect) -> u16 {
    let lines = build_transcript_lines(session.transcript(), area.width.saturating_sub(2));
    bottom_scroll(lines.len(), area)
}

/// Render the chat transcript panel
///
/// `scroll_from_bottom` counts lines scrolled up from the newest entry.
pub fn render_chat(
    frame: &mut Frame,
    area: Rect,
    session: &ChatSession,
    focused: bool,
    scroll_from_bottom: u16,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let title = match session.state() {
        SessionState::NoRoutine => " Routine Assistant ",
        SessionState::RoutineActive => " Routine Assistant · ask follow-ups ",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    let lines = build_transcript_lines(session.transcript(), area.width.saturating_sub(2));
    let top = bottom_scroll(lines.len(), area);
    let scroll = top.saturating_sub(scroll_from_bottom);

    let content = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(content, area);
}
