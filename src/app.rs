//! Application state and core logic

use crate::config::TuiConfig;
use crate::controller::{RegistrationController, ValidationEvents};
use crate::state::{
    FormField, FormLayout, RegistrationFormEvent, ValidationEvent, STATUS_BAR_HEIGHT,
};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Message shown when the form passes validation
pub const SUCCESS_MESSAGE: &str = "Registration successful";

/// Main application struct
pub struct App {
    /// Form controller owning the registration state
    pub controller: RegistrationController,
    /// Listener end for controller notifications
    events: ValidationEvents,
    /// Row that currently has focus
    pub focused: FormField,
    /// Whether password fields render as bullets
    pub mask_passwords: bool,
    /// Success dialog message, if one is open
    pub success_message: Option<String>,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        let (controller, events) = RegistrationController::new();
        Self {
            controller,
            events,
            focused: FormField::default(),
            mask_passwords: config.mask_passwords.unwrap_or(true),
            success_message: None,
            terminal_size: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Wait for the next controller notification
    pub async fn next_validation_event(&mut self) -> Option<ValidationEvent> {
        self.events.recv().await
    }

    /// React to a controller notification
    pub fn handle_validation_event(&mut self, event: ValidationEvent) {
        match event {
            ValidationEvent::Success => {
                tracing::debug!("showing registration success");
                self.success_message = Some(SUCCESS_MESSAGE.to_string());
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Some platforms also report releases
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let is_ctrl_c = key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL);

        // Success dialog is modal, except for quitting
        if self.success_message.is_some() && !is_ctrl_c {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.success_message = None;
            }
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.quit = true,
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('p') => self.mask_passwords = !self.mask_passwords,
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.focused = self.focused.next(),
            KeyCode::BackTab | KeyCode::Up => self.focused = self.focused.prev(),
            KeyCode::Char(' ') | KeyCode::Enter if self.focused == FormField::Terms => {
                self.toggle_terms();
            }
            KeyCode::Enter if self.focused == FormField::SubmitButton => self.submit(),
            KeyCode::Enter => self.focused = self.focused.next(),
            KeyCode::Char(c) if self.focused.is_text_input() => self.input_char(c),
            KeyCode::Backspace if self.focused.is_text_input() => self.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Screen area the form is drawn in, once the terminal size is known
    pub fn form_area(&self) -> Option<Rect> {
        self.terminal_size.map(|(height, width)| Rect {
            x: 0,
            y: 0,
            width,
            height: height.saturating_sub(STATUS_BAR_HEIGHT),
        })
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.success_message.is_some() {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                self.success_message = None;
            }
            return Ok(());
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let field = self
                .form_area()
                .and_then(|area| FormLayout::field_at(area, mouse.column, mouse.row));
            if let Some(field) = field {
                self.focused = field;
                match field {
                    FormField::Terms => self.toggle_terms(),
                    FormField::SubmitButton => self.submit(),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Current text of a text input row
    pub fn field_text(&self, field: FormField) -> &str {
        let state = self.controller.state();
        match field {
            FormField::Email => &state.email,
            FormField::Password => &state.password,
            FormField::RepeatedPassword => &state.repeated_password,
            FormField::Terms | FormField::SubmitButton => "",
        }
    }

    /// Current error message of a form row
    pub fn field_error(&self, field: FormField) -> Option<&str> {
        let state = self.controller.state();
        match field {
            FormField::Email => state.email_error.as_deref(),
            FormField::Password => state.password_error.as_deref(),
            FormField::RepeatedPassword => state.repeated_password_error.as_deref(),
            FormField::Terms => state.terms_error.as_deref(),
            FormField::SubmitButton => None,
        }
    }

    fn submit(&mut self) {
        self.controller.on_event(RegistrationFormEvent::Submit);
    }

    fn toggle_terms(&mut self) {
        let accepted = !self.controller.state().accepted_terms;
        self.controller.on_event(RegistrationFormEvent::AcceptTerms(accepted));
    }

    fn input_char(&mut self, c: char) {
        let mut value = self.field_text(self.focused).to_string();
        value.push(c);
        self.set_focused_text(value);
    }

    fn backspace(&mut self) {
        let mut value = self.field_text(self.focused).to_string();
        if value.pop().is_some() {
            self.set_focused_text(value);
        }
    }

    fn set_focused_text(&mut self, value: String) {
        let event = match self.focused {
            FormField::Email => RegistrationFormEvent::EmailChanged(value),
            FormField::Password => RegistrationFormEvent::PasswordChanged(value),
            FormField::RepeatedPassword => RegistrationFormEvent::RepeatedPasswordChanged(value),
            FormField::Terms | FormField::SubmitButton => return,
        };
        self.controller.on_event(event);
    }
}
