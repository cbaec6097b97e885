// ============================================================================
// Numeric Errors
// Error types for composite numeric construction and arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur at the fallible boundaries of the composite types.
///
/// Raw arithmetic on a representation is never checked; these errors are
/// reported by constructors, conversions and the `checked_*` operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Value exceeded the largest value of the target format
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
    /// Value fell below the smallest value of the target format
    #[error("arithmetic underflow: result below minimum value")]
    Underflow,
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Conversion would lose significant digits
    #[error("precision loss: conversion would lose significant digits")]
    PrecisionLoss,
    /// Input string or value is invalid
    #[error("invalid input: could not parse value")]
    InvalidInput,
    /// A format descriptor that describes no digits at all
    #[error("invalid format: an elastic format needs at least one digit")]
    InvalidFormat,
    /// A format needs more digits than the representation provides
    #[error("format overflow: {digits} digits do not fit a representation with {available} value bits")]
    FormatOverflow {
        /// Digits required by the format
        digits: u32,
        /// Value bits available in the representation
        available: u32,
    },
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
