//! Validation errors for add attempts.

use thiserror::Error;

/// A user-correctable problem with the add form. The message text is shown
/// verbatim in the notice popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter in a valid age.")]
    InvalidAge,
    #[error("Please select a valid relationship.")]
    InvalidRelationship,
}
