// ============================================================================
// Raw Representations
// The primitive integers a composite numeric type can wrap
// ============================================================================

use num_traits::{AsPrimitive, PrimInt, Signed};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A primitive integer that can serve as the raw representation of a shape.
///
/// Implemented for every fixed-width primitive integer from 8 to 128 bits.
/// `isize`/`usize` are left out because their width depends on the target.
///
/// # Casting
/// [`Rep::as_rep`] converts between any two representations with the
/// semantics of an `as` cast: widening preserves the value, narrowing keeps
/// the low bits. The conversion travels through a 128-bit carrier so that it
/// can be written once for every pair of representations.
pub trait Rep:
    PrimInt
    + Debug
    + Display
    + Hash
    + Default
    + Send
    + Sync
    + 'static
    + AsPrimitive<f32>
    + AsPrimitive<f64>
{
    /// Total width in bits.
    const BITS: u32;

    /// Whether one of the bits is a sign bit.
    const SIGNED: bool;

    /// Bits available for the magnitude (width minus the sign bit).
    const DIGITS: u32 = Self::BITS - Self::SIGNED as u32;

    /// Sign- or zero-extend into the 128-bit carrier.
    fn to_wide(self) -> u128;

    /// Truncate the 128-bit carrier down to this representation.
    fn from_wide(wide: u128) -> Self;

    /// `as`-cast into another representation.
    #[inline]
    fn as_rep<T: Rep>(self) -> T {
        T::from_wide(self.to_wide())
    }

    /// Number of value digits needed to hold `self` (at least one).
    ///
    /// Digit budgets are symmetric about zero: `d` digits hold `-(2^d - 1)`
    /// through `2^d - 1`, so `-2^k` needs `k + 1` digits and `Self::MIN`
    /// reports one more than [`Rep::DIGITS`].
    #[inline]
    fn used_digits(self) -> u32 {
        let digits = if self < Self::zero() {
            // !self == |self| - 1
            let below = !self;
            let bits = Self::BITS - below.leading_zeros();
            if below.count_ones() == bits {
                bits + 1
            } else {
                bits
            }
        } else {
            Self::BITS - self.leading_zeros()
        };
        digits.max(1)
    }
}

/// A representation with a sign bit; elastic arithmetic requires one.
pub trait SignedRep: Rep + Signed {}

macro_rules! impl_rep {
    ($($T:ty => $signed:expr),* $(,)?) => {
        $(
            impl Rep for $T {
                const BITS: u32 = <$T>::BITS;
                const SIGNED: bool = $signed;

                #[inline]
                fn to_wide(self) -> u128 {
                    self as u128
                }

                #[inline]
                fn from_wide(wide: u128) -> Self {
                    wide as $T
                }
            }
        )*
    };
}

impl_rep!(
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    i128 => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    u128 => false,
);

impl SignedRep for i8 {}
impl SignedRep for i16 {}
impl SignedRep for i32 {}
impl SignedRep for i64 {}
impl SignedRep for i128 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(<i8 as Rep>::DIGITS, 7);
        assert_eq!(<u8 as Rep>::DIGITS, 8);
        assert_eq!(<i64 as Rep>::DIGITS, 63);
        assert_eq!(<u128 as Rep>::DIGITS, 128);
        assert!(<i32 as Rep>::SIGNED);
        assert!(!<u32 as Rep>::SIGNED);
    }

    #[test]
    fn test_as_rep_matches_as_cast() {
        assert_eq!((-1i32).as_rep::<u64>(), -1i32 as u64);
        assert_eq!((-1i8).as_rep::<i128>(), -1i128);
        assert_eq!(4_000_000_000u32.as_rep::<i64>(), 4_000_000_000i64);
        assert_eq!(300i32.as_rep::<u8>(), 300i32 as u8);
        assert_eq!((-129i16).as_rep::<i8>(), -129i16 as i8);
        assert_eq!(u128::MAX.as_rep::<i128>(), -1i128);
    }

    #[test]
    fn test_used_digits() {
        assert_eq!(0i32.used_digits(), 1);
        assert_eq!(1i32.used_digits(), 1);
        assert_eq!(2i32.used_digits(), 2);
        assert_eq!((-1i32).used_digits(), 1);
        assert_eq!((-2i32).used_digits(), 2);
        assert_eq!((-3i32).used_digits(), 2);
        assert_eq!((-4i32).used_digits(), 3);
        assert_eq!(255u8.used_digits(), 8);
        assert_eq!(i64::MAX.used_digits(), 63);
        assert_eq!((-i64::MAX).used_digits(), 63);
        assert_eq!(i64::MIN.used_digits(), 64);
        assert_eq!(i8::MIN.used_digits(), 8);
    }

    #[test]
    fn test_used_digits_is_symmetric() {
        for v in -1000i32..=1000 {
            assert_eq!(v.used_digits(), (-v).used_digits(), "{}", v);
        }
        for k in 0..31 {
            let power = 1i32 << k;
            assert_eq!(power.used_digits(), k + 1);
            assert_eq!((-power).used_digits(), k + 1);
        }
    }
}
