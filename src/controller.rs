//! Registration form controller
//!
//! Owns the form state, applies form events and runs the submit flow.

use crate::domain::{RegistrationUseCases, RegistrationValidator};
use crate::state::{RegistrationFormEvent, RegistrationFormState, ValidationEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Receiving end for controller notifications
///
/// There is exactly one per controller. Events are buffered until read and
/// are never replayed once consumed.
#[derive(Debug)]
pub struct ValidationEvents {
    rx: UnboundedReceiver<ValidationEvent>,
}

impl ValidationEvents {
    /// Wait for the next event. Returns `None` once the controller is gone and
    /// the buffer is drained.
    pub async fn recv(&mut self) -> Option<ValidationEvent> {
        self.rx.recv().await
    }

    /// Take the next buffered event without waiting
    #[cfg(test)]
    pub fn try_recv(&mut self) -> Option<ValidationEvent> {
        self.rx.try_recv().ok()
    }
}

/// Form controller for the registration screen
pub struct RegistrationController<V = RegistrationUseCases> {
    validator: V,
    state: RegistrationFormState,
    events: UnboundedSender<ValidationEvent>,
}

impl RegistrationController {
    /// Create a controller with the default validators
    pub fn new() -> (Self, ValidationEvents) {
        Self::with_validator(RegistrationUseCases::default())
    }
}

impl<V: RegistrationValidator> RegistrationController<V> {
    /// Create a controller with a custom validator set
    pub fn with_validator(validator: V) -> (Self, ValidationEvents) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            validator,
            state: RegistrationFormState::default(),
            events: tx,
        };
        (controller, ValidationEvents { rx })
    }

    /// Latest form snapshot
    pub fn state(&self) -> &RegistrationFormState {
        &self.state
    }

    /// Apply a form event
    pub fn on_event(&mut self, event: RegistrationFormEvent) {
        tracing::debug!(event = event.name(), "form event");
        match event {
            RegistrationFormEvent::EmailChanged(email) => {
                self.state = RegistrationFormState {
                    email,
                    ..self.state.clone()
                };
            }
            RegistrationFormEvent::PasswordChanged(password) => {
                self.state = RegistrationFormState {
                    password,
                    ..self.state.clone()
                };
            }
            RegistrationFormEvent::RepeatedPasswordChanged(repeated_password) => {
                self.state = RegistrationFormState {
                    repeated_password,
                    ..self.state.clone()
                };
            }
            RegistrationFormEvent::AcceptTerms(accepted_terms) => {
                self.state = RegistrationFormState {
                    accepted_terms,
                    ..self.state.clone()
                };
            }
            RegistrationFormEvent::Submit => self.submit_data(),
        }
    }

    fn submit_data(&mut self) {
        let email_result = self.validator.validate_email(&self.state.email);
        let password_result = self.validator.validate_password(&self.state.password);
        let repeated_password_result = self
            .validator
            .validate_repeated_password(&self.state.password, &self.state.repeated_password);
        let terms_result = self.validator.validate_terms(self.state.accepted_terms);

        let has_error = [
            &email_result,
            &password_result,
            &repeated_password_result,
            &terms_result,
        ]
        .iter()
        .any(|result| !result.successful);

        if has_error {
            tracing::debug!(
                email = email_result.successful,
                password = password_result.successful,
                repeated_password = repeated_password_result.successful,
                terms = terms_result.successful,
                "submit rejected"
            );
            // All four are overwritten, so fields that now pass are cleared
            self.state = RegistrationFormState {
                email_error: email_result.error_message,
                password_error: password_result.error_message,
                repeated_password_error: repeated_password_result.error_message,
                terms_error: terms_result.error_message,
                ..self.state.clone()
            };
            return;
        }

        tracing::debug!("registration form passed validation");
        if self.events.send(ValidationEvent::Success).is_err() {
            tracing::warn!("no listener for validation events, success dropped");
        }
    }
}
