//! # signup-form
//!
//! The account registration form as a plain state container.
//!
//! The UI layer forwards every keystroke to [`FormController::set_field`]
//! (or as a [`FormEvent`]), calls [`FormController::submit`] on submit, and
//! re-renders with [`FormController::render`] after each mutation.
//!
//! ```rust
//! use signup_form::{FormController, SubmitOutcome};
//!
//! let mut form = FormController::new();
//! form.set_field("email", "john@site")?;
//!
//! match form.submit()? {
//!     SubmitOutcome::Rejected(errors) => assert!(errors.len() > 1),
//!     SubmitOutcome::Submitted(_) => unreachable!(),
//! }
//! # Ok::<(), signup_form::FormError>(())
//! ```

pub mod controller;
pub mod error;
pub mod render;

pub use controller::{FormController, FormEvent, SubmitOutcome};
pub use error::FormError;

// Re-export the validation core so callers need a single dependency
pub use signup_validation as validation;
pub use signup_validation::{ErrorMap, Field, FieldError, FormValues};
