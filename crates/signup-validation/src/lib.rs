//! Signup Validation Core
//!
//! Pure validation rules for the account registration form.
//! Used by the form controller and by the WASM client-side bindings.
//!
//! ```rust
//! use signup_validation::{validate, Field, FormValues};
//!
//! let mut values = FormValues::default();
//! values.set(Field::Email, "john@site");
//!
//! let errors = validate(&values);
//! assert_eq!(
//!     errors.message(Field::Email).as_deref(),
//!     Some("Invalid email format")
//! );
//! ```

pub mod date;
pub mod email;
pub mod error;
pub mod fields;
pub mod password;
pub mod validator;

pub use date::{parse_date_of_birth, validate_date_of_birth, ParsedDate};
pub use email::{is_valid_email, validate_email};
pub use error::{ErrorMap, FieldError, UnknownField};
pub use fields::{Field, FormValues};
pub use password::{validate_confirm_password, validate_password};
pub use validator::{validate, validate_field, FormValidator};

/// Core validation trait for form records
///
/// Returns `Ok(())` when every field passes, or the full error map otherwise.
pub trait Validate {
    fn validate(&self) -> Result<(), ErrorMap>;
}

impl Validate for FormValues {
    fn validate(&self) -> Result<(), ErrorMap> {
        let errors = validator::validate(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
