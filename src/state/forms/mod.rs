//! Form domain layer
//!
//! Type-safe contact form handling: field values, validation rules and the
//! submitted-data snapshot.

mod field;
mod form_state;
mod submission;
mod validation;

pub use field::{FieldName, FormField};
pub use form_state::{ContactForm, Form, SUBMIT_ROW};
pub use submission::SubmittedData;
pub use validation::{ValidationError, ValidationSchema, DEFAULT_FIRST_NAME_MIN_LENGTH};
