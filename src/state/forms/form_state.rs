//! Contact form state and focus navigation

use super::field::{FieldName, FormField};
use super::submission::SubmittedData;
use super::validation::{ValidationError, ValidationErrors, ValidationSchema};
use chrono::Utc;

/// Row index of the submit button
pub const SUBMIT_ROW: usize = 4;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The contact form: four inputs, live validation and the last submission
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    schema: ValidationSchema,
    errors: ValidationErrors,
    submitted: Option<SubmittedData>,
}

impl ContactForm {
    pub fn new(schema: ValidationSchema) -> Self {
        Self {
            first_name: FormField::text(FieldName::FirstName, "First Name*", false),
            last_name: FormField::text(FieldName::LastName, "Last Name*", false),
            email: FormField::text(FieldName::Email, "Email*", false),
            message: FormField::text(FieldName::Message, "Message", true),
            active_field_index: 0,
            schema,
            errors: ValidationErrors::new(),
            submitted: None,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        }
    }

    /// Field under focus, `None` on the submit row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Replace a field's value and re-run its rule
    #[allow(dead_code)]
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).set_text(value.into());
        self.revalidate(name);
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(name) = self.active_field_name() {
            self.field_mut(name).push_char(c);
            self.revalidate(name);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(name) = self.active_field_name() {
            self.field_mut(name).pop_char();
            self.revalidate(name);
        }
    }

    /// Insert a line break into the focused field if it is multiline
    pub fn insert_newline(&mut self) {
        if self.is_active_field_multiline() {
            self.input_char('\n');
        }
    }

    fn revalidate(&mut self, name: FieldName) {
        if !ValidationSchema::is_validated(name) {
            return;
        }
        let outcome = self.schema.validate(name, self.field(name).as_text());
        if let Err(ref err) = outcome {
            tracing::debug!(field = %name, error = %err, "field failed validation");
        }
        self.errors.apply(name, outcome);
    }

    /// Validate every field; on success capture a new submission.
    ///
    /// A failed submit leaves any earlier submission on display.
    pub fn submit(&mut self) -> Result<&SubmittedData, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for name in FieldName::ALL {
            errors.apply(name, self.schema.validate(name, self.field(name).as_text()));
        }
        self.errors = errors;

        if !self.errors.is_empty() {
            let failed: Vec<FieldName> = self.errors.iter().map(ValidationError::field).collect();
            tracing::info!(?failed, "submit rejected");
            return Err(self.errors.clone());
        }

        tracing::info!("submit accepted");
        Ok(&*self.submitted.insert(SubmittedData {
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            email: self.email.value.clone(),
            message: self.message.value.clone(),
            submitted_at: Utc::now(),
        }))
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submitted(&self) -> Option<&SubmittedData> {
        self.submitted.as_ref()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(ValidationSchema::default())
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // first name, last name, email, message, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        // Index 4 is the submit row, no FormField for it
        FieldName::ALL.get(index).map(|name| self.field(*name))
    }
}
