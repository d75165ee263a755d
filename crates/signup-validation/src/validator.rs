//! Whole-form validation

use crate::date::validate_date_of_birth;
use crate::email::validate_email;
use crate::error::{ErrorMap, FieldError};
use crate::fields::{Field, FormValues};
use crate::password::{validate_confirm_password, validate_password};

fn validate_required(field: Field, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::required(field))
    } else {
        Ok(())
    }
}

// Rule chains over already-trimmed values
fn check_field(values: &FormValues, field: Field) -> Result<(), FieldError> {
    let value = values.get(field);
    match field {
        Field::FirstName | Field::LastName => validate_required(field, value),
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
        Field::ConfirmPassword => validate_confirm_password(&values.password, value),
        Field::DateOfBirth => validate_date_of_birth(value),
    }
}

/// Runs one field's rule chain and returns its first failure
pub fn validate_field(values: &FormValues, field: Field) -> Result<(), FieldError> {
    check_field(&values.trimmed(), field)
}

/// Validates every field and returns a fresh error map
///
/// Values are trimmed once up front. An empty map means the form is valid.
pub fn validate(values: &FormValues) -> ErrorMap {
    let values = values.trimmed();
    Field::ALL
        .into_iter()
        .filter_map(|field| check_field(&values, field).err())
        .collect()
}

/// Stateless entry point for callers that prefer a value to a free function
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator;

impl FormValidator {
    pub fn new() -> Self {
        FormValidator
    }

    pub fn validate(&self, values: &FormValues) -> ErrorMap {
        validate(values)
    }

    pub fn validate_field(&self, values: &FormValues, field: Field) -> Result<(), FieldError> {
        validate_field(values, field)
    }
}
