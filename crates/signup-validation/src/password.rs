//! Password validation functions

use crate::error::FieldError;

/// Minimum password length, in UTF-16 code units
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

pub fn has_letter(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_alphabetic())
}

pub fn has_special_character(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Password rules, in order: required, length, letter, special character
///
/// Digits and case are not checked.
pub fn validate_password(password: &str) -> Result<(), FieldError> {
    let password = password.trim();

    if password.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::PasswordTooShort);
    }
    if !has_letter(password) {
        return Err(FieldError::PasswordMissingLetter);
    }
    if !has_special_character(password) {
        return Err(FieldError::PasswordMissingSpecial);
    }

    Ok(())
}

/// Confirmation rules: required, then exact match with the trimmed password
///
/// Runs independently of the password's own rules, so a weak password that
/// is repeated correctly produces no confirmation error.
pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    let confirm = confirm.trim();

    if confirm.is_empty() {
        return Err(FieldError::ConfirmPasswordRequired);
    }
    if password.trim() != confirm {
        return Err(FieldError::PasswordMismatch);
    }

    Ok(())
}
