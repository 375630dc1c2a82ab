//! Form state snapshot and form events

/// Snapshot of the registration form
///
/// Error fields describe the most recent submit attempt. Editing a field does
/// not clear its error; only the next failing submit overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFormState {
    pub email: String,
    pub email_error: Option<String>,
    pub password: String,
    pub password_error: Option<String>,
    pub repeated_password: String,
    pub repeated_password_error: Option<String>,
    pub accepted_terms: bool,
    pub terms_error: Option<String>,
}

impl RegistrationFormState {
    /// Returns true if any field currently shows an error
    pub fn has_errors(&self) -> bool {
        self.email_error.is_some()
            || self.password_error.is_some()
            || self.repeated_password_error.is_some()
            || self.terms_error.is_some()
    }
}

/// Input from the UI to the form controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationFormEvent {
    EmailChanged(String),
    PasswordChanged(String),
    RepeatedPasswordChanged(String),
    AcceptTerms(bool),
    Submit,
}

impl RegistrationFormEvent {
    /// Short name used in log output (never includes field values)
    pub fn name(&self) -> &'static str {
        match self {
            Self::EmailChanged(_) => "email_changed",
            Self::PasswordChanged(_) => "password_changed",
            Self::RepeatedPasswordChanged(_) => "repeated_password_changed",
            Self::AcceptTerms(_) => "accept_terms",
            Self::Submit => "submit",
        }
    }
}

/// One-shot notification emitted by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationEvent {
    Success,
}
