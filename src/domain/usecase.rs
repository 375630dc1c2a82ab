//! Field validation use cases
//!
//! Each use case is stateless and pure: the same input always yields the same
//! `ValidationResult`.

use super::validation::{ValidationFailure, ValidationResult, MIN_PASSWORD_LENGTH};
use email_address::EmailAddress;

/// Checks that the email is present and syntactically valid
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateEmail;

impl ValidateEmail {
    pub fn execute(&self, email: &str) -> ValidationResult {
        if email.trim().is_empty() || !EmailAddress::is_valid(email) {
            return ValidationResult::failure(ValidationFailure::EmailInvalid);
        }
        ValidationResult::success()
    }
}

/// Checks password length, then letter/digit content
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatePassword;

impl ValidatePassword {
    pub fn execute(&self, password: &str) -> ValidationResult {
        // Length is checked first; a short password never reports the content rule
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return ValidationResult::failure(ValidationFailure::PasswordTooShort);
        }
        let contains_letters_and_digits =
            password.chars().any(is_digit) && password.chars().any(is_letter);
        if !contains_letters_and_digits {
            return ValidationResult::failure(ValidationFailure::PasswordMissingLetterOrDigit);
        }
        ValidationResult::success()
    }
}

/// Decimal digits only; superscripts, fractions and roman numerals don't count
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Letter numbers such as `Ⅷ` are alphabetic in Unicode but are not letters here
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// Checks that the repeated password is exactly the password
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateRepeatedPassword;

impl ValidateRepeatedPassword {
    pub fn execute(&self, password: &str, repeated_password: &str) -> ValidationResult {
        if password != repeated_password {
            return ValidationResult::failure(ValidationFailure::PasswordMismatch);
        }
        ValidationResult::success()
    }
}

/// Checks that the terms checkbox is ticked
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateTerms;

impl ValidateTerms {
    pub fn execute(&self, accepted_terms: bool) -> ValidationResult {
        if !accepted_terms {
            return ValidationResult::failure(ValidationFailure::TermsNotAccepted);
        }
        ValidationResult::success()
    }
}

/// Trait for the registration form's field validation, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait RegistrationValidator: Send + Sync {
    /// Validate the email field
    fn validate_email(&self, email: &str) -> ValidationResult;

    /// Validate the password field
    fn validate_password(&self, password: &str) -> ValidationResult;

    /// Validate that the repeated password matches the password
    fn validate_repeated_password(&self, password: &str, repeated_password: &str)
        -> ValidationResult;

    /// Validate that the terms were accepted
    fn validate_terms(&self, accepted_terms: bool) -> ValidationResult;
}

/// Default validator set backed by the four use cases
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationUseCases {
    pub email: ValidateEmail,
    pub password: ValidatePassword,
    pub repeated_password: ValidateRepeatedPassword,
    pub terms: ValidateTerms,
}

impl RegistrationValidator for RegistrationUseCases {
    fn validate_email(&self, email: &str) -> ValidationResult {
        self.email.execute(email)
    }

    fn validate_password(&self, password: &str) -> ValidationResult {
        self.password.execute(password)
    }

    fn validate_repeated_password(
        &self,
        password: &str,
        repeated_password: &str,
    ) -> ValidationResult {
        self.repeated_password.execute(password, repeated_password)
    }

    fn validate_terms(&self, accepted_terms: bool) -> ValidationResult {
        self.terms.execute(accepted_terms)
    }
}
