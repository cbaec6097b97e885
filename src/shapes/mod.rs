// ============================================================================
// Numeric Shapes
// The composite value types built on the construction protocol
// ============================================================================
//
// This module provides:
// - Integer: a raw integer tagged with a type identity
// - ElasticNumber: fixed-point values whose digit budget grows with every
//   operation so that results never overflow
// - Fraction: exact rationals with cross-multiplying arithmetic

mod elastic;
mod fraction;
mod integer;

pub use elastic::{ElasticNumber, ElasticShape};
pub use fraction::{make_fraction, reduce, Fraction, FractionShape};
pub use integer::{Integer, IntegerShape};
