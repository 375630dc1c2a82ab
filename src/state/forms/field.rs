//! Focusable rows of the registration form

/// A focusable row in the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Email,
    Password,
    RepeatedPassword,
    Terms,
    SubmitButton,
}

impl FormField {
    /// All rows in tab order
    pub const ALL: [FormField; 5] = [
        FormField::Email,
        FormField::Password,
        FormField::RepeatedPassword,
        FormField::Terms,
        FormField::SubmitButton,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::RepeatedPassword,
            Self::RepeatedPassword => Self::Terms,
            Self::Terms => Self::SubmitButton,
            Self::SubmitButton => Self::Email,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Email => Self::SubmitButton,
            Self::Password => Self::Email,
            Self::RepeatedPassword => Self::Password,
            Self::Terms => Self::RepeatedPassword,
            Self::SubmitButton => Self::Terms,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::RepeatedPassword => "Repeat password",
            Self::Terms => "Accept terms",
            Self::SubmitButton => "Submit",
        }
    }

    /// Returns true for rows that take typed text
    pub fn is_text_input(&self) -> bool {
        matches!(
            self,
            Self::Email | Self::Password | Self::RepeatedPassword
        )
    }

    /// Returns true for rows whose value is hidden when masking is on
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::RepeatedPassword)
    }
}
