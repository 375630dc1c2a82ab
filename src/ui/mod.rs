//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, status_area) = layout::create_layout(frame.area());

    forms::draw_registration_form(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Success dialog overlays everything
    if let Some(message) = &app.success_message {
        components::render_success_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::RegistrationFormEvent;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 26);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_all_rows() {
        let app = App::new(&TuiConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Email"));
        assert!(screen.contains("Repeat password"));
        assert!(screen.contains("[ ]"));
        assert!(screen.contains("Submit"));
    }

    #[test]
    fn test_masks_passwords_by_default() {
        let mut app = App::new(&TuiConfig::default());
        app.controller
            .on_event(RegistrationFormEvent::PasswordChanged("secret99".to_string()));
        let screen = render(&app);
        assert!(!screen.contains("secret99"));
        assert!(screen.contains("••••••••"));

        app.mask_passwords = false;
        assert!(render(&app).contains("secret99"));
    }

    #[test]
    fn test_renders_error_messages() {
        let mut app = App::new(&TuiConfig::default());
        app.controller.on_event(RegistrationFormEvent::Submit);
        let screen = render(&app);
        assert!(screen.contains("That's not a valid email"));
        assert!(screen.contains("Please accept the terms"));
    }

    #[test]
    fn test_renders_success_dialog() {
        let mut app = App::new(&TuiConfig::default());
        app.success_message = Some(crate::app::SUCCESS_MESSAGE.to_string());
        assert!(render(&app).contains("Registration successful"));
    }
}
