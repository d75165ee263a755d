//! Signup Validation WASM
//!
//! WebAssembly bindings for the registration form validator.
//! The browser runs exactly the same rules as the Rust form controller.

use serde::Serialize;
use signup_validation::{self as validation, Field, FormValues};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn form_values(values: JsValue) -> Result<FormValues, JsValue> {
    serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))
}

/// Validate the whole form
///
/// # Arguments
/// * `values` - Object with `firstName`, `lastName`, `email`, `password`,
///   `confirmPassword` and `dateOfBirth`; missing keys count as empty
///
/// # Returns
/// Object mapping each invalid field to its message (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateForm({ email: 'john@site' });
/// // errors.email === 'Invalid email format'
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue) -> Result<JsValue, JsValue> {
    let values = form_values(values)?;
    let errors = validation::validate(&values);

    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    Ok(errors.serialize(&serializer)?)
}

/// Validate a single field against the current form values
///
/// Returns the field's first error message, or `undefined` when it passes.
/// Throws for names that are not form fields.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, values: JsValue) -> Result<Option<String>, JsValue> {
    let field: Field = field_name
        .parse()
        .map_err(|e: validation::UnknownField| JsValue::from_str(&e.to_string()))?;
    let values = form_values(values)?;

    Ok(validation::validate_field(&values, field).err().map(|e| e.to_string()))
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    validation::is_valid_email(email.trim())
}

/// Quick date of birth validation, `undefined` when valid
#[wasm_bindgen(js_name = isValidDateOfBirth)]
pub fn validate_date_of_birth_js(date: &str) -> Option<String> {
    validation::validate_date_of_birth(date).err().map(|e| e.to_string())
}

/// Quick password validation, `undefined` when valid
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password_js(password: &str) -> Option<String> {
    validation::validate_password(password).err().map(|e| e.to_string())
}
