//! Form fields and the raw value record

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::UnknownField;

/// The six fields of the registration form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    DateOfBirth,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::DateOfBirth,
    ];

    /// Wire name used in `name` attributes and as error map keys
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::DateOfBirth => "dateOfBirth",
        }
    }

    /// Human-readable label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "E-mail",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::DateOfBirth => "Date of Birth (dd/mm/yyyy)",
        }
    }

    /// HTML input type
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password | Field::ConfirmPassword => "password",
            Field::FirstName | Field::LastName | Field::DateOfBirth => "text",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::Email => Some("example@example.com"),
            Field::DateOfBirth => Some("dd/mm/yyyy"),
            _ => None,
        }
    }

    /// Whether the value must stay out of logs
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Raw string values as typed by the user
///
/// Every field defaults to the empty string. The validator only reads a
/// snapshot and never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub date_of_birth: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::DateOfBirth => &self.date_of_birth,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::DateOfBirth => &mut self.date_of_birth,
        };
        *slot = value.into();
    }

    /// Builder-style setter
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> FormValues {
        let mut out = FormValues::default();
        for field in Field::ALL {
            out.set(field, self.get(field).trim());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_name() {
        let err = "middleName".parse::<Field>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown form field: middleName");
        // wire names are case-sensitive
        assert!("FirstName".parse::<Field>().is_err());
    }

    #[test]
    fn test_set_and_get() {
        let mut values = FormValues::default();
        values.set(Field::DateOfBirth, "01/01/2000");
        assert_eq!(values.get(Field::DateOfBirth), "01/01/2000");
        assert_eq!(values.date_of_birth, "01/01/2000");
        assert_eq!(values.get(Field::FirstName), "");
    }

    #[test]
    fn test_trimmed_leaves_original_untouched() {
        let values = FormValues::default()
            .with(Field::FirstName, "  John ")
            .with(Field::Password, "\tsecret!! ");
        let trimmed = values.trimmed();

        assert_eq!(trimmed.first_name, "John");
        assert_eq!(trimmed.password, "secret!!");
        assert_eq!(values.first_name, "  John ");
    }

    #[test]
    fn test_secret_fields() {
        assert!(Field::Password.is_secret());
        assert!(Field::ConfirmPassword.is_secret());
        assert!(!Field::Email.is_secret());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_form_values_wire_format() {
        let values: FormValues =
            serde_json::from_str(r#"{"firstName":"John","dateOfBirth":"29/02/2000"}"#).unwrap();
        assert_eq!(values.first_name, "John");
        assert_eq!(values.date_of_birth, "29/02/2000");
        assert_eq!(values.email, "");

        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["confirmPassword"], "");
    }
}
