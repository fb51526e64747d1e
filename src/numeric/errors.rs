// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing, computing or formatting decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a number in the requested radix
    InvalidNumber,
    /// Attempted division (or remainder) by zero
    DivisionByZero,
    /// Operand outside the domain of the operation (e.g. square root of a negative)
    InvalidDomain,
    /// Result exponent above the configured maximum
    RangeOverflow,
    /// Result exponent below the configured minimum
    RangeUnderflow,
    /// Configuration value or digit-count argument out of range
    InvalidConfiguration,
    /// Radix outside 2..=64
    InvalidRadix(u32),
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidNumber => write!(f, "invalid number: could not parse value"),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidDomain => {
                write!(f, "invalid domain: operand outside the domain of the operation")
            },
            NumericError::RangeOverflow => {
                write!(f, "range overflow: result exponent above maximum")
            },
            NumericError::RangeUnderflow => {
                write!(f, "range underflow: result exponent below minimum")
            },
            NumericError::InvalidConfiguration => {
                write!(f, "invalid configuration: value out of range")
            },
            NumericError::InvalidRadix(radix) => {
                write!(f, "invalid radix {}: must be between 2 and 64", radix)
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::RangeOverflow.to_string(),
            "range overflow: result exponent above maximum"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::InvalidRadix(65).to_string(),
            "invalid radix 65: must be between 2 and 64"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::RangeOverflow, NumericError::RangeOverflow);
        assert_ne!(NumericError::RangeOverflow, NumericError::RangeUnderflow);
        assert_ne!(NumericError::InvalidRadix(1), NumericError::InvalidRadix(65));
    }
}
