//! Form domain layer
//!
//! Validation outcomes and the per-field validation use cases.

mod usecase;
mod validation;

pub use usecase::{RegistrationUseCases, RegistrationValidator};
#[cfg(test)]
pub use usecase::MockRegistrationValidator;
#[cfg(test)]
pub use validation::ValidationFailure;
pub use validation::ValidationResult;
