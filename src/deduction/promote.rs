// ============================================================================
// Type-Level Promotion
// Picks the representation type of an arithmetic result at compile time
// ============================================================================

use crate::numeric::Rep;

/// The type an operand is promoted to before arithmetic.
pub trait IntegerPromotion: Rep {
    /// `i32` for representations narrower than 32 bits, otherwise `Self`.
    type Promoted: Rep;
}

/// Common representation of two already-promoted representations.
pub trait Common<Rhs: Rep>: Rep {
    /// The representation the operation is carried out in.
    type Output: Rep;
}

/// Representation of the result of an arithmetic operation between `Self`
/// and `Rhs`.
///
/// Agrees with [`RepDescriptor::common`](super::RepDescriptor::common) for
/// every pair of primitive representations. `u128` has no common
/// representation with a signed type, so such pairs do not compile:
///
/// ```compile_fail
/// use composite_numerics::shapes::Integer;
///
/// let _ = Integer::from_rep(u128::MAX) + Integer::from_rep(-1i128);
/// ```
pub trait Promote<Rhs: Rep = Self>: Rep {
    /// The result representation.
    type Output: Rep;
}

/// Shorthand for `<L as Promote<R>>::Output`.
pub type Promoted<L, R = L> = <L as Promote<R>>::Output;

impl<L, R> Promote<R> for L
where
    L: IntegerPromotion,
    R: IntegerPromotion,
    L::Promoted: Common<R::Promoted>,
{
    type Output = <L::Promoted as Common<R::Promoted>>::Output;
}

macro_rules! impl_integer_promotion {
    ($($T:ty => $P:ty),* $(,)?) => {
        $(
            impl IntegerPromotion for $T {
                type Promoted = $P;
            }
        )*
    };
}

impl_integer_promotion!(
    i8 => i32,
    i16 => i32,
    u8 => i32,
    u16 => i32,
    i32 => i32,
    i64 => i64,
    i128 => i128,
    u32 => u32,
    u64 => u64,
    u128 => u128,
);

macro_rules! impl_common {
    ($($L:ty: [$($R:ty => $O:ty),*]);* $(;)?) => {
        $($(
            impl Common<$R> for $L {
                type Output = $O;
            }
        )*)*
    };
}

impl_common!(
    i32: [i32 => i32, i64 => i64, i128 => i128, u32 => i64, u64 => i128];
    i64: [i32 => i64, i64 => i64, i128 => i128, u32 => i64, u64 => i128];
    i128: [i32 => i128, i64 => i128, i128 => i128, u32 => i128, u64 => i128];
    u32: [i32 => i64, i64 => i64, i128 => i128, u32 => u32, u64 => u64, u128 => u128];
    u64: [i32 => i128, i64 => i128, i128 => i128, u32 => u64, u64 => u64, u128 => u128];
    u128: [u32 => u128, u64 => u128, u128 => u128];
);

// ============================================================================
// Promoted Arithmetic
// ============================================================================

/// `lhs + rhs` carried out in the promoted representation.
#[inline]
pub fn promoted_add<L: Promote<R>, R: Rep>(lhs: L, rhs: R) -> Promoted<L, R> {
    lhs.as_rep::<Promoted<L, R>>() + rhs.as_rep::<Promoted<L, R>>()
}

/// `lhs - rhs` carried out in the promoted representation.
#[inline]
pub fn promoted_sub<L: Promote<R>, R: Rep>(lhs: L, rhs: R) -> Promoted<L, R> {
    lhs.as_rep::<Promoted<L, R>>() - rhs.as_rep::<Promoted<L, R>>()
}

/// `lhs * rhs` carried out in the promoted representation.
#[inline]
pub fn promoted_mul<L: Promote<R>, R: Rep>(lhs: L, rhs: R) -> Promoted<L, R> {
    lhs.as_rep::<Promoted<L, R>>() * rhs.as_rep::<Promoted<L, R>>()
}

/// `lhs / rhs` carried out in the promoted representation.
#[inline]
pub fn promoted_div<L: Promote<R>, R: Rep>(lhs: L, rhs: R) -> Promoted<L, R> {
    lhs.as_rep::<Promoted<L, R>>() / rhs.as_rep::<Promoted<L, R>>()
}

/// `lhs % rhs` carried out in the promoted representation.
#[inline]
pub fn promoted_rem<L: Promote<R>, R: Rep>(lhs: L, rhs: R) -> Promoted<L, R> {
    lhs.as_rep::<Promoted<L, R>>() % rhs.as_rep::<Promoted<L, R>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deduction::RepDescriptor;
    use std::any::TypeId;

    fn agrees<L: Promote<R>, R: Rep>() {
        assert_eq!(
            Some(RepDescriptor::of::<Promoted<L, R>>()),
            RepDescriptor::common(RepDescriptor::of::<L>(), RepDescriptor::of::<R>()),
            "{} with {}",
            std::any::type_name::<L>(),
            std::any::type_name::<R>()
        );
    }

    macro_rules! check_row {
        ($L:ty; $($R:ty),*) => {
            $(agrees::<$L, $R>();)*
        };
    }

    macro_rules! check_all {
        ($($L:ty),*) => {
            $(check_row!($L; i8, i16, i32, i64, i128, u8, u16, u32, u64);)*
        };
    }

    #[test]
    fn test_table_agrees_with_descriptors() {
        check_all!(i8, i16, i32, i64, i128, u8, u16, u32, u64);
        check_row!(u128; u32, u64, u128);
        check_row!(u32; u128);
        check_row!(u64; u128);
    }

    #[test]
    fn test_u128_with_signed_has_no_common_rep() {
        let u128_rep = RepDescriptor::of::<u128>();
        // u8 and u16 promote to i32 first
        for other in [
            RepDescriptor::of::<i8>(),
            RepDescriptor::of::<i16>(),
            RepDescriptor::of::<i32>(),
            RepDescriptor::of::<i64>(),
            RepDescriptor::of::<i128>(),
            RepDescriptor::of::<u8>(),
            RepDescriptor::of::<u16>(),
        ] {
            assert_eq!(RepDescriptor::common(other, u128_rep), None, "{}", other);
            assert_eq!(RepDescriptor::common(u128_rep, other), None, "{}", other);
        }
    }

    #[test]
    fn test_selected_results() {
        assert_eq!(TypeId::of::<Promoted<i16, i16>>(), TypeId::of::<i32>());
        assert_eq!(TypeId::of::<Promoted<i64, i32>>(), TypeId::of::<i64>());
        assert_eq!(TypeId::of::<Promoted<i32, i64>>(), TypeId::of::<i64>());
        assert_eq!(TypeId::of::<Promoted<u32, i32>>(), TypeId::of::<i64>());
        assert_eq!(TypeId::of::<Promoted<u8, u8>>(), TypeId::of::<i32>());
        assert_eq!(TypeId::of::<Promoted<u64>>(), TypeId::of::<u64>());
    }

    #[test]
    fn test_promoted_arithmetic() {
        // 200 + 100 does not fit u8 but fits the promoted i32
        assert_eq!(promoted_add(200u8, 100u8), 300i32);
        assert_eq!(promoted_sub(0u32, 1i32), -1i64);
        assert_eq!(promoted_mul(i32::MAX, 2i64), i32::MAX as i64 * 2);
        assert_eq!(promoted_div(-7i16, 2i16), -3i32);
        assert_eq!(promoted_rem(-7i16, 2i16), -1i32);
    }
}
