//! Validation failures and the per-field error map

use std::collections::btree_map::{self, BTreeMap};

use thiserror::Error;

use crate::fields::Field;

/// A single failed rule. The `Display` output is the message shown inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Last name is required")]
    LastNameRequired,

    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Password must contain at least one letter")]
    PasswordMissingLetter,
    #[error("Password must contain at least one special character")]
    PasswordMissingSpecial,

    #[error("Please confirm your password")]
    ConfirmPasswordRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Date of birth is required")]
    DateOfBirthRequired,
    #[error("Date format must be dd/mm/yyyy")]
    InvalidDateFormat,
    #[error("Month must be between 1 and 12")]
    MonthOutOfRange,
    #[error("Day must be between 1 and 31")]
    DayOutOfRange,
    #[error("February cannot have more than 29 days")]
    FebruaryTooLong,
    #[error("Invalid date")]
    InvalidDate,
}

impl FieldError {
    /// The field this rule belongs to
    pub fn field(self) -> Field {
        use FieldError::*;
        match self {
            FirstNameRequired => Field::FirstName,
            LastNameRequired => Field::LastName,
            EmailRequired | InvalidEmail => Field::Email,
            PasswordRequired | PasswordTooShort | PasswordMissingLetter
            | PasswordMissingSpecial => Field::Password,
            ConfirmPasswordRequired | PasswordMismatch => Field::ConfirmPassword,
            DateOfBirthRequired | InvalidDateFormat | MonthOutOfRange | DayOutOfRange
            | FebruaryTooLong | InvalidDate => Field::DateOfBirth,
        }
    }

    /// The "is required" failure for a field
    pub fn required(field: Field) -> FieldError {
        match field {
            Field::FirstName => FieldError::FirstNameRequired,
            Field::LastName => FieldError::LastNameRequired,
            Field::Email => FieldError::EmailRequired,
            Field::Password => FieldError::PasswordRequired,
            Field::ConfirmPassword => FieldError::ConfirmPasswordRequired,
            Field::DateOfBirth => FieldError::DateOfBirthRequired,
        }
    }
}

/// A field name that is not part of the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

/// First failing rule per field
///
/// A field is absent when it passed every rule. Iteration follows form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<Field, FieldError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for its field, keeping an earlier one if present
    pub fn record(&mut self, error: FieldError) {
        self.errors.entry(error.field()).or_insert(error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Message for a field, if it failed
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    /// Messages keyed by wire name
    pub fn to_messages(&self) -> BTreeMap<&'static str, String> {
        self.iter().map(|(f, e)| (f.name(), e.to_string())).collect()
    }
}

impl FromIterator<FieldError> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut map = ErrorMap::new();
        for error in iter {
            map.record(error);
        }
        map
    }
}

impl IntoIterator for ErrorMap {
    type Item = (Field, FieldError);
    type IntoIter = btree_map::IntoIter<Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.name(), &error.to_string())?;
        }
        map.end()
    }
}
