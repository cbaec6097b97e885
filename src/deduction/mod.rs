// ============================================================================
// Result-Type Deduction
// Decides what an arithmetic result is represented in
// ============================================================================
//
// This module provides:
// - RepDescriptor: width/signedness of a raw representation and the
//   promotion rules for combining two of them
// - Promote / Promoted: the same rules as a compile-time type table, used by
//   the wrapped integer and fraction operators
// - ElasticFormat: digit budgets of elastic numbers and the per-operator
//   growth rules that keep elastic arithmetic free of overflow
//
// The rules are plain functions over descriptors so that they can be tested
// apart from the arithmetic they drive.

mod descriptor;
mod format;
mod promote;

pub use descriptor::RepDescriptor;
pub use format::ElasticFormat;
pub use promote::{
    promoted_add, promoted_div, promoted_mul, promoted_rem, promoted_sub, Common,
    IntegerPromotion, Promote, Promoted,
};
