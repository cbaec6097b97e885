// ============================================================================
// Wrapped Integer
// A raw integer tagged as a composite numeric value
// ============================================================================

use crate::deduction::{
    promoted_add, promoted_div, promoted_mul, promoted_rem, promoted_sub, Promote, Promoted,
    RepDescriptor,
};
use crate::numeric::{Rep, SignedRep};
use crate::protocol::{Composite, FromRep, Shape, ShapeKind};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// A raw integer wrapped as a composite value.
///
/// The wrapper adds type identity only: the stored value is the raw
/// representation, bit for bit. Arithmetic between wrapped integers, or
/// between a wrapped integer and a bare primitive on either side, yields a
/// wrapped integer in the [`Promoted`] representation of the operands.
///
/// # Example
/// ```
/// use composite_numerics::shapes::Integer;
///
/// let a = Integer::from_rep(200u8);
/// let b = Integer::from_rep(100u8);
/// let sum = a + b; // Integer<i32>
/// assert_eq!(sum.to_rep(), 300i32);
/// assert_eq!((sum + 1i64).to_rep(), 301i64);
/// ```
#[derive(Clone, Copy, Default, Hash)]
#[repr(transparent)]
pub struct Integer<R = i32>(R);

/// Construction-protocol shape of [`Integer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntegerShape;

impl Shape for IntegerShape {
    const KIND: ShapeKind = ShapeKind::Integer;
}

impl<R: Rep> FromRep<R> for IntegerShape {
    type Output = Integer<R>;

    #[inline]
    fn from_rep(&self, rep: R) -> Integer<R> {
        Integer(rep)
    }
}

impl<R: Rep> Composite for Integer<R> {
    type Rep = R;
    type Shape = IntegerShape;

    #[inline]
    fn shape(&self) -> IntegerShape {
        IntegerShape
    }

    #[inline]
    fn to_rep(&self) -> R {
        self.0
    }
}

impl<R: Rep> Integer<R> {
    /// Wrap a raw representation.
    #[inline]
    pub fn from_rep(rep: R) -> Self {
        Self(rep)
    }

    /// The raw representation.
    #[inline]
    pub fn to_rep(self) -> R {
        self.0
    }

    /// Convert to another representation with `as`-cast semantics.
    #[inline]
    pub fn convert<T: Rep>(self) -> Integer<T> {
        Integer(self.0.as_rep())
    }

    /// Approximate as `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0.as_()
    }
}

impl<R: Rep> From<R> for Integer<R> {
    #[inline]
    fn from(rep: R) -> Self {
        Self(rep)
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl<L, R> PartialEq<Integer<R>> for Integer<L>
where
    L: Promote<R>,
    R: Rep,
{
    #[inline]
    fn eq(&self, other: &Integer<R>) -> bool {
        self.0.as_rep::<Promoted<L, R>>() == other.0.as_rep::<Promoted<L, R>>()
    }
}

impl<R: Promote<R>> Eq for Integer<R> {}

impl<L, R> PartialOrd<Integer<R>> for Integer<L>
where
    L: Promote<R>,
    R: Rep,
{
    #[inline]
    fn partial_cmp(&self, other: &Integer<R>) -> Option<Ordering> {
        Some(
            self.0
                .as_rep::<Promoted<L, R>>()
                .cmp(&other.0.as_rep::<Promoted<L, R>>()),
        )
    }
}

impl<R: Promote<R>> Ord for Integer<R> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

macro_rules! impl_integer_binary_op {
    ($Op:ident, $method:ident, $promoted:ident; $($P:ty),*) => {
        impl<L, R> $Op<Integer<R>> for Integer<L>
        where
            L: Promote<R>,
            R: Rep,
        {
            type Output = Integer<Promoted<L, R>>;

            #[inline]
            fn $method(self, rhs: Integer<R>) -> Self::Output {
                Integer($promoted(self.0, rhs.0))
            }
        }

        $(
            impl<L: Promote<$P>> $Op<$P> for Integer<L> {
                type Output = Integer<Promoted<L, $P>>;

                #[inline]
                fn $method(self, rhs: $P) -> Self::Output {
                    Integer($promoted(self.0, rhs))
                }
            }

            impl<R: Rep> $Op<Integer<R>> for $P
            where
                $P: Promote<R>,
            {
                type Output = Integer<Promoted<$P, R>>;

                #[inline]
                fn $method(self, rhs: Integer<R>) -> Self::Output {
                    Integer($promoted(self, rhs.0))
                }
            }
        )*
    };
}

macro_rules! impl_integer_binary_ops {
    ($($P:ty),*) => {
        impl_integer_binary_op!(Add, add, promoted_add; $($P),*);
        impl_integer_binary_op!(Sub, sub, promoted_sub; $($P),*);
        impl_integer_binary_op!(Mul, mul, promoted_mul; $($P),*);
        impl_integer_binary_op!(Div, div, promoted_div; $($P),*);
        impl_integer_binary_op!(Rem, rem, promoted_rem; $($P),*);
    };
}

impl_integer_binary_ops!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// Compound assignment stays within the left-hand representation.
macro_rules! impl_integer_assign_op {
    ($($Op:ident, $method:ident, $op:tt);* $(;)?) => {
        $(
            impl<R: Rep> $Op for Integer<R> {
                #[inline]
                fn $method(&mut self, rhs: Self) {
                    self.0 = self.0 $op rhs.0;
                }
            }
        )*
    };
}

impl_integer_assign_op!(
    AddAssign, add_assign, +;
    SubAssign, sub_assign, -;
    MulAssign, mul_assign, *;
    DivAssign, div_assign, /;
    RemAssign, rem_assign, %;
);

impl<R: SignedRep> Neg for Integer<R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<R: Rep> fmt::Debug for Integer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer<{}>({})", RepDescriptor::of::<R>(), self.0)
    }
}

impl<R: Rep> fmt::Display for Integer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::any::TypeId;

    fn type_of<T: 'static>(_: &T) -> TypeId {
        TypeId::of::<T>()
    }

    #[test]
    fn test_from_rep_is_identity() {
        assert_eq!(Integer::from_rep(-5i8).to_rep(), -5i8);
        assert_eq!(Integer::from(u64::MAX).to_rep(), u64::MAX);
        assert_eq!(Integer::<i32>::default().to_rep(), 0);
    }

    #[test]
    fn test_wrapped_plus_wrapped_promotes() {
        let sum = Integer::from_rep(1i16) + Integer::from_rep(2i64);
        assert_eq!(type_of(&sum), TypeId::of::<Integer<i64>>());
        assert_eq!(sum.to_rep(), 3);

        let product = Integer::from_rep(100i8) * Integer::from_rep(100i8);
        assert_eq!(type_of(&product), TypeId::of::<Integer<i32>>());
        assert_eq!(product.to_rep(), 10_000);
    }

    #[test]
    fn test_wrapped_with_bare_integer_stays_wrapped() {
        let a = Integer::from_rep(7i32);

        let right = a + 3i64;
        assert_eq!(type_of(&right), TypeId::of::<Integer<i64>>());
        assert_eq!(right.to_rep(), 10);

        let left = 3u32 - a;
        assert_eq!(type_of(&left), TypeId::of::<Integer<i64>>());
        assert_eq!(left.to_rep(), -4);

        assert_eq!((a / 2i32).to_rep(), 3);
        assert_eq!((a % 2i32).to_rep(), 1);
        assert_eq!((10i32 * a).to_rep(), 70);
    }

    #[test]
    fn test_assign_ops() {
        let mut a = Integer::from_rep(10i64);
        a += Integer::from_rep(5);
        a -= Integer::from_rep(3);
        a *= Integer::from_rep(4);
        a /= Integer::from_rep(6);
        a %= Integer::from_rep(5);
        assert_eq!(a.to_rep(), 3);
    }

    #[test]
    fn test_comparison_across_reps() {
        assert_eq!(Integer::from_rep(5u8), Integer::from_rep(5i64));
        assert_ne!(Integer::from_rep(u32::MAX), Integer::from_rep(-1i32));
        assert!(Integer::from_rep(-1i32) < Integer::from_rep(0u32));
        assert!(Integer::from_rep(3i16) > Integer::from_rep(2i16));
        assert_eq!(
            Integer::from_rep(3i16).cmp(&Integer::from_rep(3i16)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_negation_and_convert() {
        assert_eq!((-Integer::from_rep(5i32)).to_rep(), -5);
        assert_eq!(Integer::from_rep(-1i32).convert::<u8>().to_rep(), 255u8);
        assert_eq!(Integer::from_rep(7i32).to_f64(), 7.0);
    }

    #[test]
    fn test_display_and_debug() {
        let n = Integer::from_rep(-42i16);
        assert_eq!(n.to_string(), "-42");
        assert_eq!(format!("{:?}", n), "Integer<i16>(-42)");
    }

    proptest! {
        #[test]
        fn prop_round_trip_i64(raw in any::<i64>()) {
            prop_assert_eq!(Integer::from_rep(raw).to_rep(), raw);
        }

        #[test]
        fn prop_round_trip_u16(raw in any::<u16>()) {
            prop_assert_eq!(IntegerShape.from_rep(raw).to_rep(), raw);
        }

        #[test]
        fn prop_promoted_sum_is_exact(a in any::<i32>(), b in any::<i32>()) {
            let sum = Integer::from_rep(a) + Integer::from_rep(b as i64);
            prop_assert_eq!(sum.to_rep(), a as i64 + b as i64);
        }
    }
}
