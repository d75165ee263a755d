//! Maud markup for the registration form
//!
//! Fields are laid out in on-screen order, which puts the date of birth
//! before the password confirmation.

use maud::{html, Markup};
use signup_validation::{ErrorMap, Field, FieldError, FormValues};

pub const DISPLAY_ORDER: [Field; 6] = [
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Password,
    Field::DateOfBirth,
    Field::ConfirmPassword,
];

/// Whole page for the current state
pub fn page(values: &FormValues, errors: &ErrorMap, submitted: bool) -> Markup {
    html! {
        div class="app" {
            h1 { "Create New Account" }
            @if submitted {
                (success(&values.first_name))
            } @else {
                (form(values, errors))
            }
        }
    }
}

pub fn form(values: &FormValues, errors: &ErrorMap) -> Markup {
    html! {
        form class="account-form" method="post" novalidate {
            @for field in DISPLAY_ORDER {
                (field_group(field, values.get(field), errors.get(field)))
            }
            button type="submit" class="submit-btn" { "SUBMIT" }
        }
    }
}

/// Label, input and inline error for one field
pub fn field_group(field: Field, value: &str, error: Option<FieldError>) -> Markup {
    let name = field.name();
    html! {
        div class="form-group" {
            label for=(name) { (field.label()) }
            input
                type=(field.input_type())
                id=(name)
                name=(name)
                value=(value)
                placeholder=[field.placeholder()]
                class=[error.map(|_| "error")];
            @if let Some(error) = error {
                span class="error-message" { (error.to_string()) }
            }
        }
    }
}

pub fn success(first_name: &str) -> Markup {
    html! {
        div class="success-message" {
            h2 { "Account created successfully!" }
            p { "Welcome, " (first_name) "!" }
        }
    }
}
