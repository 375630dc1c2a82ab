//! Registration form state
//!
//! The snapshot rendered by the UI, the events that change it, and the
//! focusable rows of the form.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{RegistrationFormEvent, RegistrationFormState, ValidationEvent};
