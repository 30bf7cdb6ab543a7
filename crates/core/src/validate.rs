//! Precondition checks shared by every calculation.

use std::fmt;

use thiserror::Error;

/// Why an operand was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputErrorKind {
    /// Missing, or text that does not parse as a number.
    NonNumeric,
    /// NaN or ±Infinity.
    NonFinite,
}

impl fmt::Display for InputErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputErrorKind::NonNumeric => f.write_str("non-numeric"),
            InputErrorKind::NonFinite => f.write_str("non-finite"),
        }
    }
}

/// Raised for the first operand that is not a finite number.
///
/// `position` is 1-based and refers to the argument order of the function
/// (or field order of the scenario) that performed the check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: argument {position} (`{name}`) is {kind}")]
pub struct InvalidInputError {
    pub kind: InputErrorKind,
    pub position: usize,
    pub name: &'static str,
}

/// Check a single operand, returning it unchanged when finite.
pub fn check_finite(
    position: usize,
    name: &'static str,
    value: f64,
) -> Result<f64, InvalidInputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInputError {
            kind: InputErrorKind::NonFinite,
            position,
            name,
        })
    }
}

/// Validate named operands in order, stopping at the first failure.
pub fn validate_inputs(operands: &[(&'static str, f64)]) -> Result<(), InvalidInputError> {
    for (idx, &(name, value)) in operands.iter().enumerate() {
        check_finite(idx + 1, name, value)?;
    }
    Ok(())
}

/// Parse a textual operand. Missing or unparsable text is non-numeric;
/// `"NaN"` or `"inf"` parse but are rejected as non-finite.
pub fn parse_operand(
    position: usize,
    name: &'static str,
    raw: Option<&str>,
) -> Result<f64, InvalidInputError> {
    let non_numeric = InvalidInputError {
        kind: InputErrorKind::NonNumeric,
        position,
        name,
    };
    let text = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(non_numeric.clone())?;
    let value: f64 = text.parse().map_err(|_| non_numeric)?;
    check_finite(position, name, value)
}
