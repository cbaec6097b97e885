// ============================================================================
// Construction Protocol
// Turns a raw representation value into a composite value of a given shape
// ============================================================================
//
// Every shape implements `FromRep` once. Arithmetic operators compute a raw
// result, ask the deduction rules for the result's shape parameters and then
// re-wrap the raw result through this protocol; the raw value is stored
// verbatim.

use std::fmt::Debug;

/// The shape families this library composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Integer`](crate::shapes::Integer): a tagged raw integer
    Integer,
    /// [`ElasticNumber`](crate::shapes::ElasticNumber): fixed-point with
    /// growing digit budgets
    Elastic,
    /// [`Fraction`](crate::shapes::Fraction): numerator over denominator
    Fraction,
}

impl ShapeKind {
    /// Every shape, in construction-protocol order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Integer, ShapeKind::Elastic, ShapeKind::Fraction];

    /// Short lowercase name for logging.
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Integer => "integer",
            ShapeKind::Elastic => "elastic",
            ShapeKind::Fraction => "fraction",
        }
    }
}

/// A shape descriptor.
///
/// Shapes whose parameters live at the value level (the digit budget of an
/// elastic number) carry them as fields; the other shapes are unit structs.
pub trait Shape: Copy + Debug {
    /// Which family this shape belongs to.
    const KIND: ShapeKind;
}

/// Construction from a raw representation.
///
/// The returned value holds `rep` bit for bit; no scaling, normalization or
/// range check is applied.
pub trait FromRep<R>: Shape {
    /// The composite type produced for representation `R`.
    type Output;

    /// Wrap `rep` in this shape.
    fn from_rep(&self, rep: R) -> Self::Output;
}

/// A value constructed through [`FromRep`], and the way back to its raw
/// representation.
pub trait Composite: Sized {
    /// The raw representation.
    type Rep;

    /// The shape that reconstructs `Self` from [`Composite::Rep`].
    type Shape: FromRep<Self::Rep, Output = Self>;

    /// The shape of this value, including any value-level parameters.
    fn shape(&self) -> Self::Shape;

    /// The raw representation, bit for bit.
    fn to_rep(&self) -> Self::Rep;
}

/// Construct a value of `shape` holding `rep`.
///
/// # Example
/// ```
/// use composite_numerics::protocol::from_rep;
/// use composite_numerics::shapes::{Integer, IntegerShape};
///
/// let n = from_rep(&IntegerShape, 42i16);
/// assert_eq!(n, Integer::from_rep(42i16));
/// ```
#[inline]
pub fn from_rep<S: FromRep<R>, R>(shape: &S, rep: R) -> S::Output {
    shape.from_rep(rep)
}

/// The raw representation of `value`.
#[inline]
pub fn to_rep<C: Composite>(value: &C) -> C::Rep {
    value.to_rep()
}

/// Rebuild `value` from its own shape and representation.
#[inline]
pub fn rewrap<C: Composite>(value: &C) -> C {
    value.shape().from_rep(value.to_rep())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deduction::ElasticFormat;
    use crate::shapes::{ElasticNumber, ElasticShape, Fraction, FractionShape, Integer, IntegerShape};

    #[test]
    fn test_shape_kinds_are_enumerable() {
        assert_eq!(ShapeKind::ALL.len(), 3);
        assert_eq!(IntegerShape::KIND, ShapeKind::Integer);
        assert_eq!(ElasticShape::<i64>::KIND, ShapeKind::Elastic);
        assert_eq!(FractionShape::KIND, ShapeKind::Fraction);
        let names: Vec<_> = ShapeKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["integer", "elastic", "fraction"]);
    }

    #[test]
    fn test_from_rep_per_shape() {
        let n: Integer<u8> = from_rep(&IntegerShape, 200u8);
        assert_eq!(n.to_rep(), 200u8);

        let shape = ElasticShape::<i64>::new(ElasticFormat::FFT_DEFAULT).unwrap();
        let e: ElasticNumber<i64> = from_rep(&shape, 3i64 << 16);
        assert_eq!(e.to_rep(), 3 << 16);
        assert_eq!(e.format(), ElasticFormat::FFT_DEFAULT);
        assert_eq!(e.to_f64(), 3.0);

        let f: Fraction<i16, i64> = from_rep(&FractionShape, (6i16, -3i64));
        assert_eq!(f.numerator, 6);
        assert_eq!(f.denominator, -3);
    }

    #[test]
    fn test_rewrap_is_identity() {
        let n = Integer::from_rep(-7i32);
        assert_eq!(rewrap(&n), n);
        assert_eq!(to_rep(&n), -7);

        let e = ElasticNumber::<i64>::from_f64(-1.25, ElasticFormat::Q15_16).unwrap();
        let back = rewrap(&e);
        assert_eq!(back.to_rep(), e.to_rep());
        assert_eq!(back.format(), e.format());

        let f = Fraction::new(4, 18);
        let back = rewrap(&f);
        assert_eq!((back.numerator, back.denominator), (4, 18));
    }
}
