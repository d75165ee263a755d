//! Form state and the submit flow

use maud::Markup;
use signup_validation::{ErrorMap, Field, FormValidator, FormValues};

use crate::error::FormError;
use crate::render;

/// Input events coming from the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A change event on the input with the given `name` attribute
    Input { name: String, value: String },
    Submit,
    Reset,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; carries the submitted values
    Submitted(FormValues),
    /// At least one field failed; the form stays editable
    Rejected(ErrorMap),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Owns the live field values, the errors from the last submit, and the
/// submitted flag
#[derive(Debug, Clone, Default)]
pub struct FormController {
    values: FormValues,
    errors: ErrorMap,
    submitted: bool,
    validator: FormValidator,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Errors from the most recent submit attempt
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Updates one field by its wire name
    ///
    /// Errors shown from the last submit are left as they are until the next
    /// submit.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field: Field = name.parse()?;
        self.set(field, value)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        if self.submitted {
            return Err(FormError::AlreadySubmitted);
        }
        self.values.set(field, value);
        tracing::debug!("Field updated: {}", field);
        Ok(())
    }

    /// Validates the current values
    ///
    /// The new error map replaces the previous one wholesale. On success the
    /// controller switches to the submitted state.
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        if self.submitted {
            return Err(FormError::AlreadySubmitted);
        }

        self.errors = self.validator.validate(&self.values);

        if !self.errors.is_empty() {
            tracing::debug!("Submit rejected with {} invalid field(s)", self.errors.len());
            return Ok(SubmitOutcome::Rejected(self.errors.clone()));
        }

        self.submitted = true;
        tracing::info!(
            first_name = %self.values.first_name,
            last_name = %self.values.last_name,
            email = %self.values.email,
            date_of_birth = %self.values.date_of_birth,
            "Form submitted"
        );
        Ok(SubmitOutcome::Submitted(self.values.clone()))
    }

    /// Back to an empty, editable form
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::debug!("Form reset");
    }

    /// Dispatches a UI event. Only `Submit` produces an outcome.
    pub fn handle(&mut self, event: FormEvent) -> Result<Option<SubmitOutcome>, FormError> {
        match event {
            FormEvent::Input { name, value } => {
                self.set_field(&name, value)?;
                Ok(None)
            }
            FormEvent::Submit => self.submit().map(Some),
            FormEvent::Reset => {
                self.reset();
                Ok(None)
            }
        }
    }

    /// Markup for the current state
    pub fn render(&self) -> Markup {
        render::page(&self.values, &self.errors, self.submitted)
    }
}
