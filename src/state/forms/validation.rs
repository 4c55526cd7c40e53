//! Field validation rules for the contact form

use super::field::FieldName;
use email_address::{EmailAddress, Options};
use std::collections::BTreeMap;
use thiserror::Error;

/// Default minimum length of the first name
pub const DEFAULT_FIRST_NAME_MIN_LENGTH: usize = 5;

/// A single failed field rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is a required field")]
    Required { field: FieldName },
    #[error("{field} must be at least {min} characters")]
    TooShort { field: FieldName, min: usize },
    #[error("{field} must be a valid email address")]
    InvalidFormat { field: FieldName },
}

impl ValidationError {
    /// The field this error is scoped to
    pub fn field(&self) -> FieldName {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidFormat { field } => *field,
        }
    }
}

/// Active validation errors, at most one per field, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one field rule, replacing any previous error
    pub fn apply(&mut self, field: FieldName, outcome: Result<(), ValidationError>) {
        match outcome {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err);
            }
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate errors in field display order
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }
}

/// The rule set applied to the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSchema {
    pub first_name_min_length: usize,
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self {
            first_name_min_length: DEFAULT_FIRST_NAME_MIN_LENGTH,
        }
    }
}

impl ValidationSchema {
    /// Run the rule for a single field.
    ///
    /// Each field yields at most one error: an empty value always reports
    /// `Required`, so length and format are only checked on non-empty input.
    pub fn validate(&self, field: FieldName, value: &str) -> Result<(), ValidationError> {
        match field {
            FieldName::FirstName => {
                require(field, value)?;
                let min = self.first_name_min_length;
                if value.chars().count() < min {
                    return Err(ValidationError::TooShort { field, min });
                }
                Ok(())
            }
            FieldName::LastName => require(field, value),
            FieldName::Email => {
                require(field, value)?;
                // Bare addresses only, no "Name <addr>" display form
                let options = Options::default().without_display_text();
                if EmailAddress::parse_with_options(value, options).is_err() {
                    return Err(ValidationError::InvalidFormat { field });
                }
                Ok(())
            }
            FieldName::Message => Ok(()),
        }
    }

    /// Whether a field has a rule at all
    pub fn is_validated(field: FieldName) -> bool {
        !matches!(field, FieldName::Message)
    }
}

fn require(field: FieldName, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}
