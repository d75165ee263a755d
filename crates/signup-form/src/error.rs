use signup_validation::UnknownField;
use thiserror::Error;

/// Misuse of the form controller. Invalid user input is never a `FormError`;
/// it ends up in the controller's `ErrorMap`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("Form has already been submitted")]
    AlreadySubmitted,
}
