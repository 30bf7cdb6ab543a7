use kinematics_core::InvalidInputError;
use thiserror::Error;

/// Failure of a single update: a rejected operand, or a result that overflowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error("`{quantity}` overflowed to a non-finite value")]
    NonFiniteResult { quantity: &'static str },
}

impl UpdateError {
    /// The rejected operand, when the failure came from validation.
    pub fn input_error(&self) -> Option<&InvalidInputError> {
        match self {
            UpdateError::InvalidInput(err) => Some(err),
            UpdateError::NonFiniteResult { .. } => None,
        }
    }
}

pub(crate) fn finite_result(quantity: &'static str, value: f64) -> Result<f64, UpdateError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(UpdateError::NonFiniteResult { quantity })
    }
}
