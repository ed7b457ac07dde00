// ============================================================================
// Numeric Errors
// Error types for decimal construction and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or computing with a [`Bcd`].
///
/// [`Bcd`]: super::Bcd
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Input text contains a character outside digits, one sign and one dot
    InvalidCharacter,
    /// Integer portion of an external input exceeds the digit limit
    IntegerOverflow,
    /// Attempted reciprocal of zero
    DivisionByZero,
    /// Operation is not supported by this arithmetic
    UnsupportedOperation,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::InvalidCharacter => {
                write!(f, "invalid character in decimal string")
            },
            DecimalError::IntegerOverflow => {
                write!(f, "integer overflow: integer part exceeds 10 digits")
            },
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::UnsupportedOperation => write!(f, "unsupported operation"),
            DecimalError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DecimalError::IntegerOverflow.to_string(),
            "integer overflow: integer part exceeds 10 digits"
        );
        assert_eq!(DecimalError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            DecimalError::InvalidCharacter.to_string(),
            "invalid character in decimal string"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(DecimalError::DivisionByZero, DecimalError::DivisionByZero);
        assert_ne!(DecimalError::InvalidCharacter, DecimalError::IntegerOverflow);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DecimalError::UnsupportedOperation);
        assert_eq!(err.to_string(), "unsupported operation");
    }
}
