//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Character drawn in place of each masked character
const MASK_CHAR: char = '•';

/// Text shown for a value, masked when requested
pub fn display_value(value: &str, masked: bool) -> String {
    if masked {
        std::iter::repeat(MASK_CHAR)
            .take(value.chars().count())
            .collect()
    } else {
        value.to_string()
    }
}

fn border_style(is_active: bool, has_error: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a single-line text input
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    has_error: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let display = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error));

    frame.render_widget(content.block(block), area);
}

/// Draw a checkbox field
pub fn draw_checkbox_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    is_active: bool,
    has_error: bool,
) {
    let checkbox = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error));

    let paragraph = Paragraph::new(format!("{checkbox} {label}"))
        .style(style)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Draw the error line under a field (blank when there is no error)
pub fn draw_error_line(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(error) = error {
        let line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_unmasked() {
        assert_eq!(display_value("abc", false), "abc");
    }

    #[test]
    fn test_display_value_masks_per_char() {
        assert_eq!(display_value("äb1", true), "•••");
        assert_eq!(display_value("", true), "");
    }
}
