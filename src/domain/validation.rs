//! Validation outcome value objects

use thiserror::Error;

/// Minimum number of characters a password must have
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Reasons a single field can fail validation.
///
/// The `Display` output is the message shown to the user under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("That's not a valid email")]
    EmailInvalid,
    #[error("The password needs to consist of at least 8 characters")]
    PasswordTooShort,
    #[error("The password needs to contain at least a letter and digit")]
    PasswordMissingLetterOrDigit,
    #[error("The passwords don't match")]
    PasswordMismatch,
    #[error("Please accept the terms")]
    TermsNotAccepted,
}

/// Outcome of validating one field
///
/// `error_message` is only ever set when `successful` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub successful: bool,
    pub error_message: Option<String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            successful: true,
            error_message: None,
        }
    }

    pub fn failure(reason: ValidationFailure) -> Self {
        Self {
            successful: false,
            error_message: Some(reason.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_no_message() {
        let result = ValidationResult::success();
        assert!(result.successful);
        assert!(result.error_message.is_none());
    }

    #[test]
    fn test_failure_carries_display_message() {
        let result = ValidationResult::failure(ValidationFailure::TermsNotAccepted);
        assert!(!result.successful);
        assert_eq!(
            result.error_message.as_deref(),
            Some("Please accept the terms")
        );
    }

    #[test]
    fn test_too_short_message_includes_minimum() {
        assert_eq!(
            ValidationFailure::PasswordTooShort.to_string(),
            "The password needs to consist of at least 8 characters"
        );
    }
}
