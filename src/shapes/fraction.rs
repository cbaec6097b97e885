// ============================================================================
// Fraction
// Exact rational numbers as an unnormalized numerator/denominator pair
// ============================================================================

use crate::deduction::{promoted_add, promoted_mul, promoted_sub, Promote, Promoted, RepDescriptor};
use crate::numeric::{gcd, NumericError, NumericResult, Rep, SignedRep};
use crate::protocol::{Composite, FromRep, Shape, ShapeKind};
use num_traits::Zero;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// A rational number `numerator / denominator`.
///
/// Both terms are stored verbatim: construction never normalizes, so
/// `Fraction::new(4, 18)` keeps `4` and `18`. Use [`reduce`] to bring a
/// fraction to lowest terms.
///
/// Arithmetic cross-multiplies in the [`Promoted`] representations of the
/// operand terms and performs no range or zero-denominator checks; the
/// native integer semantics apply (overflow panics in debug builds, a zero
/// denominator propagates).
///
/// # Example
/// ```
/// use composite_numerics::shapes::{make_fraction, reduce, Fraction};
///
/// let sum = make_fraction(1i64, 3i32) + make_fraction(2i32, 3i32);
/// assert_eq!((sum.numerator, sum.denominator), (9i64, 9i32));
/// assert_eq!(reduce(sum), Fraction::new(1i64, 1i64));
///
/// let third: f32 = make_fraction(1, 3).to_f32();
/// assert!((third - 0.333_333_34).abs() < f32::EPSILON);
/// ```
#[derive(Clone, Copy)]
pub struct Fraction<N = i32, D = N> {
    pub numerator: N,
    pub denominator: D,
}

/// Construction-protocol shape of [`Fraction`]; the representation is the
/// `(numerator, denominator)` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FractionShape;

impl Shape for FractionShape {
    const KIND: ShapeKind = ShapeKind::Fraction;
}

impl<N: Rep, D: Rep> FromRep<(N, D)> for FractionShape {
    type Output = Fraction<N, D>;

    #[inline]
    fn from_rep(&self, (numerator, denominator): (N, D)) -> Fraction<N, D> {
        Fraction::new(numerator, denominator)
    }
}

impl<N: Rep, D: Rep> Composite for Fraction<N, D> {
    type Rep = (N, D);
    type Shape = FractionShape;

    #[inline]
    fn shape(&self) -> FractionShape {
        FractionShape
    }

    #[inline]
    fn to_rep(&self) -> (N, D) {
        (self.numerator, self.denominator)
    }
}

/// `numerator / denominator` with both types deduced from the arguments.
#[inline]
pub fn make_fraction<N: Rep, D: Rep>(numerator: N, denominator: D) -> Fraction<N, D> {
    Fraction::new(numerator, denominator)
}

/// The same rational value in lowest terms.
///
/// Both terms are divided by their non-negative greatest common divisor in
/// the promoted representation of `N` and `D`. Signs are kept as they are:
/// `-6/-3` reduces to `-2/-1` and `6/-3` to `2/-1`. A fraction with both
/// terms zero has no divisor and is returned unchanged.
///
/// # Example
/// ```
/// use composite_numerics::shapes::{make_fraction, reduce};
///
/// let r = reduce(make_fraction(1024i16, 360i64));
/// assert_eq!((r.numerator, r.denominator), (128i64, 45i64));
/// ```
pub fn reduce<N, D>(f: Fraction<N, D>) -> Fraction<Promoted<N, D>, Promoted<N, D>>
where
    N: Promote<D>,
    D: Rep,
{
    let numerator = f.numerator.as_rep::<Promoted<N, D>>();
    let denominator = f.denominator.as_rep::<Promoted<N, D>>();
    let divisor = gcd(numerator, denominator);
    if divisor.is_zero() {
        return Fraction::new(numerator, denominator);
    }
    tracing::trace!(%numerator, %denominator, %divisor, "reducing fraction");
    Fraction::new(numerator / divisor, denominator / divisor)
}

// ============================================================================
// Construction
// ============================================================================

impl<N: Rep, D: Rep> Fraction<N, D> {
    /// Store `numerator / denominator` verbatim.
    #[inline]
    pub fn new(numerator: N, denominator: D) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Converting copy with `as`-cast semantics for each term.
    ///
    /// Narrowing keeps the low bits; checking the range is the caller's
    /// responsibility.
    #[inline]
    pub fn convert<N2: Rep, D2: Rep>(self) -> Fraction<N2, D2> {
        Fraction::new(self.numerator.as_rep(), self.denominator.as_rep())
    }

    /// `denominator / numerator`.
    #[inline]
    pub fn reciprocal(self) -> Fraction<D, N> {
        Fraction::new(self.denominator, self.numerator)
    }

    /// Floating-point quotient of the two terms.
    #[inline]
    pub fn to_f64(self) -> f64 {
        let numerator: f64 = self.numerator.as_();
        let denominator: f64 = self.denominator.as_();
        numerator / denominator
    }

    /// Floating-point quotient of the two terms.
    #[inline]
    pub fn to_f32(self) -> f32 {
        let numerator: f32 = self.numerator.as_();
        let denominator: f32 = self.denominator.as_();
        numerator / denominator
    }
}

impl<N: Rep> Fraction<N, N> {
    /// `value / 1`.
    #[inline]
    pub fn from_integer(value: N) -> Self {
        Self::new(value, N::one())
    }
}

impl<N: Rep> From<N> for Fraction<N, N> {
    #[inline]
    fn from(value: N) -> Self {
        Self::from_integer(value)
    }
}

impl<N: Rep, D: Rep> Default for Fraction<N, D> {
    /// `0 / 1`.
    fn default() -> Self {
        Self::new(N::zero(), D::one())
    }
}

impl<N: Rep, D: Rep> From<Fraction<N, D>> for f64 {
    #[inline]
    fn from(f: Fraction<N, D>) -> f64 {
        f.to_f64()
    }
}

impl<N: Rep, D: Rep> From<Fraction<N, D>> for f32 {
    #[inline]
    fn from(f: Fraction<N, D>) -> f32 {
        f.to_f32()
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

/// Representation the cross products `n1 * d2` and `n2 * d1` are combined in.
type CrossRep<N1, D1, N2, D2> = Promoted<Promoted<N1, D2>, Promoted<N2, D1>>;

impl<N1, D1, N2, D2> Add<Fraction<N2, D2>> for Fraction<N1, D1>
where
    N1: Promote<D2>,
    N2: Promote<D1>,
    D1: Promote<D2>,
    D2: Rep,
    Promoted<N1, D2>: Promote<Promoted<N2, D1>>,
{
    type Output = Fraction<CrossRep<N1, D1, N2, D2>, Promoted<D1, D2>>;

    #[inline]
    fn add(self, rhs: Fraction<N2, D2>) -> Self::Output {
        Fraction::new(
            promoted_add(
                promoted_mul(self.numerator, rhs.denominator),
                promoted_mul(rhs.numerator, self.denominator),
            ),
            promoted_mul(self.denominator, rhs.denominator),
        )
    }
}

impl<N1, D1, N2, D2> Sub<Fraction<N2, D2>> for Fraction<N1, D1>
where
    N1: Promote<D2>,
    N2: Promote<D1>,
    D1: Promote<D2>,
    D2: Rep,
    Promoted<N1, D2>: Promote<Promoted<N2, D1>>,
{
    type Output = Fraction<CrossRep<N1, D1, N2, D2>, Promoted<D1, D2>>;

    #[inline]
    fn sub(self, rhs: Fraction<N2, D2>) -> Self::Output {
        Fraction::new(
            promoted_sub(
                promoted_mul(self.numerator, rhs.denominator),
                promoted_mul(rhs.numerator, self.denominator),
            ),
            promoted_mul(self.denominator, rhs.denominator),
        )
    }
}

impl<N1, D1, N2, D2> Mul<Fraction<N2, D2>> for Fraction<N1, D1>
where
    N1: Promote<N2>,
    D1: Promote<D2>,
    N2: Rep,
    D2: Rep,
{
    type Output = Fraction<Promoted<N1, N2>, Promoted<D1, D2>>;

    #[inline]
    fn mul(self, rhs: Fraction<N2, D2>) -> Self::Output {
        Fraction::new(
            promoted_mul(self.numerator, rhs.numerator),
            promoted_mul(self.denominator, rhs.denominator),
        )
    }
}

impl<N1, D1, N2, D2> Div<Fraction<N2, D2>> for Fraction<N1, D1>
where
    N1: Promote<D2>,
    D1: Promote<N2>,
    N2: Rep,
    D2: Rep,
{
    type Output = Fraction<Promoted<N1, D2>, Promoted<D1, N2>>;

    #[inline]
    fn div(self, rhs: Fraction<N2, D2>) -> Self::Output {
        Fraction::new(
            promoted_mul(self.numerator, rhs.denominator),
            promoted_mul(self.denominator, rhs.numerator),
        )
    }
}

impl<N: SignedRep, D: Rep> Neg for Fraction<N, D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.numerator, self.denominator)
    }
}

// ============================================================================
// Comparison
// ============================================================================

/// `(n1 * d2, n2 * d1)` in the common cross-product representation.
#[inline]
fn cross_products<N1, D1, N2, D2>(
    lhs: &Fraction<N1, D1>,
    rhs: &Fraction<N2, D2>,
) -> (CrossRep<N1, D1, N2, D2>, CrossRep<N1, D1, N2, D2>)
where
    N1: Promote<D2>,
    N2: Promote<D1>,
    D1: Rep,
    D2: Rep,
    Promoted<N1, D2>: Promote<Promoted<N2, D1>>,
{
    (
        promoted_mul(lhs.numerator, rhs.denominator).as_rep(),
        promoted_mul(rhs.numerator, lhs.denominator).as_rep(),
    )
}

/// Cross-multiplied equality: `a/b == c/d` iff `a*d == c*b`.
///
/// This is not an equivalence once a denominator is zero, so `Eq` is not
/// implemented.
impl<N1, D1, N2, D2> PartialEq<Fraction<N2, D2>> for Fraction<N1, D1>
where
    N1: Promote<D2>,
    N2: Promote<D1>,
    D1: Rep,
    D2: Rep,
    Promoted<N1, D2>: Promote<Promoted<N2, D1>>,
{
    #[inline]
    fn eq(&self, other: &Fraction<N2, D2>) -> bool {
        let (lhs, rhs) = cross_products(self, other);
        lhs == rhs
    }
}

/// Orders by rational value, accounting for negative denominators.
///
/// Unordered when a denominator is zero, unless the cross products are
/// equal.
impl<N1, D1, N2, D2> PartialOrd<Fraction<N2, D2>> for Fraction<N1, D1>
where
    N1: Promote<D2>,
    N2: Promote<D1>,
    D1: Rep,
    D2: Rep,
    Promoted<N1, D2>: Promote<Promoted<N2, D1>>,
{
    fn partial_cmp(&self, other: &Fraction<N2, D2>) -> Option<Ordering> {
        let (lhs, rhs) = cross_products(self, other);
        let ordering = lhs.cmp(&rhs);
        if ordering == Ordering::Equal {
            return Some(ordering);
        }

        match (
            self.denominator.cmp(&D1::zero()),
            other.denominator.cmp(&D2::zero()),
        ) {
            (Ordering::Equal, _) | (_, Ordering::Equal) => None,
            (a, b) if a == b => Some(ordering),
            _ => Some(ordering.reverse()),
        }
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl<N: Rep, D: Rep> fmt::Debug for Fraction<N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fraction<{}, {}>({}/{})",
            RepDescriptor::of::<N>(),
            RepDescriptor::of::<D>(),
            self.numerator,
            self.denominator
        )
    }
}

impl<N: fmt::Display, D: fmt::Display> fmt::Display for Fraction<N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Parses `"n/d"` or a bare integer `"n"` (denominator 1).
///
/// # Errors
/// - `InvalidInput` if a term is not an integer of its representation
/// - `DivisionByZero` if the denominator is zero
impl<N: Rep, D: Rep> FromStr for Fraction<N, D> {
    type Err = NumericError;

    fn from_str(s: &str) -> NumericResult<Self> {
        let s = s.trim();
        let (numerator, denominator) = match s.split_once('/') {
            Some((n, d)) => (n.trim(), Some(d.trim())),
            None => (s, None),
        };

        let numerator = N::from_str_radix(numerator, 10).map_err(|_| NumericError::InvalidInput)?;
        let denominator = match denominator {
            Some(d) => D::from_str_radix(d, 10).map_err(|_| NumericError::InvalidInput)?,
            None => D::one(),
        };
        if denominator == D::zero() {
            return Err(NumericError::DivisionByZero);
        }

        Ok(Self::new(numerator, denominator))
    }
}
