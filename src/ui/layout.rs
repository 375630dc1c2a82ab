//! Layout components (form area, status bar)

use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::STATUS_BAR_HEIGHT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and a one-line status bar.
///
/// The form area starts at the top row so mouse rows map directly onto
/// `FormLayout`.
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.controller.state();

    let indicator = if state.has_errors() {
        Span::styled(" ● ", Style::default().fg(Color::Red))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };

    let mask_hint = if app.mask_passwords { "show" } else { "hide" };
    let spans = vec![
        indicator,
        Span::styled(
            format!("{SUBMIT_SHORTCUT}:submit  {REVEAL_SHORTCUT}:{mask_hint} passwords"),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(" | "),
        Span::styled("Esc:quit ", Style::default().fg(Color::Gray)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_starts_at_top() {
        let (form, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(form.y, 0);
        assert_eq!(form.height, 23);
        assert_eq!(status.y, 23);
        assert_eq!(status.height, 1);
    }
}
