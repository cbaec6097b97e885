// ============================================================================
// Representation Descriptors
// Value-level description of a raw representation and its promotion rules
// ============================================================================

use crate::numeric::Rep;
use std::fmt;

/// Width and signedness of a raw representation.
///
/// The descriptor functions are the reference for the type-level
/// [`Promote`](super::Promote) table: for every pair of representations
/// `L`, `R` that has a common representation,
/// `Some(RepDescriptor::of::<Promoted<L, R>>())` equals
/// `RepDescriptor::common(RepDescriptor::of::<L>(), RepDescriptor::of::<R>())`.
/// Pairs for which `common` is `None` have no `Promote` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepDescriptor {
    /// Total width in bits
    pub bits: u32,
    /// Whether one bit is a sign bit
    pub signed: bool,
}

/// Narrowest width an arithmetic operand is promoted to.
const PROMOTION_BITS: u32 = 32;

/// Widest primitive representation.
const MAX_BITS: u32 = 128;

impl RepDescriptor {
    /// Create a descriptor.
    #[inline]
    pub const fn new(bits: u32, signed: bool) -> Self {
        Self { bits, signed }
    }

    /// Describe a representation type.
    #[inline]
    pub fn of<R: Rep>() -> Self {
        Self::new(R::BITS, R::SIGNED)
    }

    /// Bits available for the magnitude.
    #[inline]
    pub const fn digits(self) -> u32 {
        self.bits - self.signed as u32
    }

    /// Integer promotion: operands narrower than 32 bits take part in
    /// arithmetic as `i32`, which holds every value of theirs.
    #[inline]
    pub const fn promoted(self) -> Self {
        if self.bits < PROMOTION_BITS {
            Self::new(PROMOTION_BITS, true)
        } else {
            self
        }
    }

    /// The representation an arithmetic operation between `a` and `b`
    /// is carried out in.
    ///
    /// Both operands are promoted first. With equal signedness the wider one
    /// wins. With mixed signedness the result is the narrowest signed
    /// representation holding both.
    ///
    /// Returns `None` when no primitive holds both, which is `u128` mixed
    /// with any signed representation.
    pub const fn common(a: Self, b: Self) -> Option<Self> {
        let a = a.promoted();
        let b = b.promoted();

        if a.signed == b.signed {
            let bits = if a.bits > b.bits { a.bits } else { b.bits };
            return Some(Self::new(bits, a.signed));
        }

        let (signed, unsigned) = if a.signed { (a, b) } else { (b, a) };
        if signed.bits > unsigned.bits {
            Some(signed)
        } else if unsigned.bits < MAX_BITS {
            Some(Self::new(unsigned.bits * 2, true))
        } else {
            None
        }
    }
}

impl fmt::Display for RepDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.signed { 'i' } else { 'u' };
        write!(f, "{}{}", prefix, self.bits)
    }
}
