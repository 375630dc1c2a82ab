//! Registration form rendering

use super::field_renderer::{
    display_value, draw_checkbox_field, draw_error_line, draw_text_field,
};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{
    FormField, FormLayout, BUTTON_WIDTH, ERROR_LINE_HEIGHT, FORM_TOP, HELP_HEIGHT, INPUT_HEIGHT,
};
use crate::ui::components::render_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the registration form
pub fn draw_registration_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Create Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|field| Constraint::Length(FormLayout::row_height(*field)))
        .collect();
    constraints.push(Constraint::Length(HELP_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(FORM_TOP)
        .split(area);

    for (index, field) in FormField::ALL.iter().enumerate() {
        draw_row(frame, chunks[index], app, *field);
    }

    draw_help_text(frame, chunks[FormField::ALL.len()], app.focused);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, field: FormField) {
    let is_active = app.focused == field;
    let error = app.field_error(field);

    if field == FormField::SubmitButton {
        let button_area = Rect {
            width: area.width.min(BUTTON_WIDTH),
            ..area
        };
        render_button(frame, button_area, field.label(), is_active);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(ERROR_LINE_HEIGHT),
        ])
        .split(area);

    if field == FormField::Terms {
        draw_checkbox_field(
            frame,
            rows[0],
            "I accept the terms and conditions",
            app.controller.state().accepted_terms,
            is_active,
            error.is_some(),
        );
    } else {
        let masked = app.mask_passwords && field.is_secret();
        let value = display_value(app.field_text(field), masked);
        draw_text_field(
            frame,
            rows[0],
            field.label(),
            &value,
            is_active,
            error.is_some(),
        );
    }
    draw_error_line(frame, rows[1], error);
}

fn draw_help_text(frame: &mut Frame, area: Rect, focused: FormField) {
    let key_style = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled("Tab", key_style),
        Span::raw(": next field  "),
    ];
    match focused {
        FormField::Terms => {
            spans.push(Span::styled("Space", key_style));
            spans.push(Span::raw(": toggle  "));
        }
        FormField::SubmitButton => {
            spans.push(Span::styled("Enter", key_style));
            spans.push(Span::raw(": submit  "));
        }
        _ => {}
    }
    spans.push(Span::styled(SUBMIT_SHORTCUT, key_style));
    spans.push(Span::raw(": submit  "));
    spans.push(Span::styled("Esc", key_style));
    spans.push(Span::raw(": quit"));

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
