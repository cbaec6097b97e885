// ============================================================================
// Numeric Module
// Raw representations, errors and integer helpers shared by every shape
// ============================================================================
//
// This module provides:
// - Rep / SignedRep: the primitive integers a shape may wrap
// - NumericError: Error types for the fallible boundaries
// - gcd: Euclidean greatest common divisor used by fraction reduction
//
// Design principles:
// - Raw arithmetic is never checked; overflow is avoided structurally
// - Conversions between representations behave like `as` casts

mod errors;
mod gcd;
mod rep;

pub use errors::{NumericError, NumericResult};
pub use gcd::gcd;
pub use rep::{Rep, SignedRep};
