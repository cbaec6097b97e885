// ============================================================================
// Elastic Fixed-Point Number
// Fixed-point arithmetic whose digit budget grows with every operation
// ============================================================================

use crate::deduction::ElasticFormat;
use crate::numeric::{NumericError, NumericResult, Rep, SignedRep};
use crate::protocol::{Composite, FromRep, Shape, ShapeKind};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Fixed-point number stored as `rep × 2^exponent`.
///
/// The [`ElasticFormat`] travels with the value and always fits the raw
/// representation `R`. Every arithmetic operation first computes the result
/// format with the promotion rules of [`ElasticFormat`] and only then runs
/// the raw arithmetic, so a result can never overflow its own digit budget.
/// When the promoted format needs more digits than `R` has value bits, the
/// `checked_*` methods return `FormatOverflow` and the operators panic.
///
/// # Example
/// ```
/// use composite_numerics::deduction::ElasticFormat;
/// use composite_numerics::shapes::ElasticNumber;
///
/// let format = ElasticFormat::from_parts(4, 4).unwrap();
/// let a = ElasticNumber::<i32>::from_f64(7.5, format).unwrap();
/// let b = ElasticNumber::<i32>::from_f64(15.9375, format).unwrap();
///
/// let sum = a + b;
/// assert_eq!(sum.format().integer_digits(), 5);
/// assert_eq!(sum.to_f64(), 23.4375);
///
/// let product = a * b;
/// assert_eq!(product.format().digits(), 16);
/// assert_eq!(product.to_f64(), 119.53125);
/// ```
#[derive(Clone, Copy)]
pub struct ElasticNumber<R = i64> {
    rep: R,
    format: ElasticFormat,
}

/// Construction-protocol shape of [`ElasticNumber`]: a format already
/// checked against the representation `R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElasticShape<R = i64> {
    format: ElasticFormat,
    _rep: PhantomData<R>,
}

impl<R: Rep> ElasticShape<R> {
    /// Shape for values of `format` carried in `R`.
    ///
    /// # Errors
    /// Returns `FormatOverflow` if `format` does not fit `R`.
    pub fn new(format: ElasticFormat) -> NumericResult<Self> {
        format.validate::<R>()?;
        Ok(Self::validated(format))
    }

    #[inline]
    fn validated(format: ElasticFormat) -> Self {
        Self {
            format,
            _rep: PhantomData,
        }
    }

    /// The digit budget this shape wraps raw values in.
    #[inline]
    pub fn format(&self) -> ElasticFormat {
        self.format
    }
}

impl<R: Rep> Shape for ElasticShape<R> {
    const KIND: ShapeKind = ShapeKind::Elastic;
}

impl<R: Rep> FromRep<R> for ElasticShape<R> {
    type Output = ElasticNumber<R>;

    #[inline]
    fn from_rep(&self, rep: R) -> ElasticNumber<R> {
        ElasticNumber {
            rep,
            format: self.format,
        }
    }
}

impl<R: Rep> Composite for ElasticNumber<R> {
    type Rep = R;
    type Shape = ElasticShape<R>;

    #[inline]
    fn shape(&self) -> ElasticShape<R> {
        ElasticShape::validated(self.format)
    }

    #[inline]
    fn to_rep(&self) -> R {
        self.rep
    }
}

// ============================================================================
// Construction
// ============================================================================

impl<R: Rep> ElasticNumber<R> {
    /// Wrap a raw representation that is already scaled by `2^exponent`.
    ///
    /// # Errors
    /// Returns `FormatOverflow` if `format` does not fit `R`.
    #[inline]
    pub fn from_rep(rep: R, format: ElasticFormat) -> NumericResult<Self> {
        Ok(ElasticShape::<R>::new(format)?.from_rep(rep))
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// - `FormatOverflow` if `format` does not fit `R`
    /// - `Overflow`/`Underflow` if the value needs more integer digits than
    ///   `format` has
    /// - `PrecisionLoss` if the format's exponent is positive and the value
    ///   is not a multiple of `2^exponent`
    pub fn from_integer(value: R, format: ElasticFormat) -> NumericResult<Self> {
        format.validate::<R>()?;
        if value == R::zero() {
            return Ok(Self { rep: value, format });
        }

        if value.used_digits() as i32 > format.integer_digits() {
            return Err(out_of_range(value));
        }

        let fractional = format.fractional_digits();
        let rep = if fractional >= 0 {
            value << fractional as usize
        } else {
            let shift = (-fractional) as u32;
            if shift >= R::BITS || (value >> shift as usize) << shift as usize != value {
                return Err(NumericError::PrecisionLoss);
            }
            value >> shift as usize
        };

        Ok(Self { rep, format })
    }

    /// Quantize a floating-point value into `format`, rounding to the
    /// nearest representable value.
    ///
    /// # Errors
    /// - `FormatOverflow` if `format` does not fit `R`
    /// - `InvalidInput` for NaN or infinite values
    /// - `Overflow`/`Underflow` if the value is outside the range of `format`,
    ///   which is symmetric: `-2^D` is out of range like `2^D`
    pub fn from_f64(value: f64, format: ElasticFormat) -> NumericResult<Self> {
        format.validate::<R>()?;
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }

        let scaled = (value * pow2_f64(format.fractional_digits())).round();
        let limit = pow2_f64(format.digits() as i32);
        if scaled >= limit {
            return Err(NumericError::Overflow);
        }
        if scaled <= -limit || (!R::SIGNED && scaled < 0.0) {
            return Err(NumericError::Underflow);
        }

        let rep = num_traits::cast::<f64, R>(scaled).ok_or(NumericError::Overflow)?;
        Ok(Self { rep, format })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw representation.
    #[inline]
    pub fn to_rep(self) -> R {
        self.rep
    }

    /// The digit budget of this value.
    #[inline]
    pub fn format(self) -> ElasticFormat {
        self.format
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.rep == R::zero()
    }

    /// Convert to `f64`: the raw representation divided by `2^F`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        let rep: f64 = self.rep.as_();
        rep * pow2_f64(self.format.exponent())
    }

    /// Convert to `f32`.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    // ========================================================================
    // Format Conversion
    // ========================================================================

    /// Re-express the value in another format.
    ///
    /// Dropping fractional digits rounds to nearest, ties toward positive
    /// infinity.
    ///
    /// # Errors
    /// - `FormatOverflow` if `format` does not fit `R`
    /// - `Overflow`/`Underflow` if the value does not fit the integer digits
    ///   of `format`
    pub fn convert(self, format: ElasticFormat) -> NumericResult<Self> {
        format.validate::<R>()?;
        if self.is_zero() {
            return Ok(Self {
                rep: self.rep,
                format,
            });
        }

        let shift = format.fractional_digits() - self.format.fractional_digits();
        let rep = if shift >= 0 {
            let widened = self.rep.used_digits() as i64 + shift as i64;
            if widened > format.digits() as i64 {
                tracing::debug!(from = %self.format, to = %format, "elastic conversion out of range");
                return Err(out_of_range(self.rep));
            }
            self.rep << shift as usize
        } else {
            round_shift_right(self.rep, (-shift) as u32)
        };

        if rep != R::zero() && rep.used_digits() > format.digits() {
            tracing::debug!(from = %self.format, to = %format, "elastic conversion out of range");
            return Err(out_of_range(rep));
        }
        Ok(Self { rep, format })
    }

    /// Multiply by `2^n` by moving the binary point; the raw value is kept.
    #[inline]
    pub fn scale_by_pow2(self, n: i32) -> Self {
        Self {
            rep: self.rep,
            format: self.format.with_exponent(self.format.exponent() + n),
        }
    }

    // ========================================================================
    // Decimal Conversion
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Exact while the number of fractional digits stays within the 28
    /// decimal places `Decimal` can hold; beyond that the last place is
    /// rounded.
    ///
    /// # Errors
    /// Returns `Overflow` if the value exceeds the 96-bit `Decimal` mantissa.
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        let raw = self.rep.to_i128().ok_or(NumericError::Overflow)?;
        let raw = Decimal::try_from_i128_with_scale(raw, 0).map_err(|_| NumericError::Overflow)?;
        let exponent = self.format.exponent();
        let factor = pow2_decimal(exponent.unsigned_abs())?;
        let value = if exponent >= 0 {
            raw.checked_mul(factor)
        } else {
            raw.checked_div(factor)
        };
        value.map(|d| d.normalize()).ok_or(NumericError::Overflow)
    }

    /// Convert from `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries (parsing user input).
    ///
    /// # Errors
    /// - `FormatOverflow` if `format` does not fit `R`
    /// - `PrecisionLoss` if `d` is not a multiple of `2^exponent`
    /// - `Overflow`/`Underflow` if `d` is outside the range of `format`
    pub fn from_decimal(d: Decimal, format: ElasticFormat) -> NumericResult<Self> {
        format.validate::<R>()?;

        let exponent = format.exponent();
        let factor = pow2_decimal(exponent.unsigned_abs())?;
        let scaled = if exponent <= 0 {
            d.checked_mul(factor)
        } else {
            d.checked_div(factor)
        }
        .ok_or(NumericError::Overflow)?;

        if !scaled.fract().is_zero() {
            return Err(NumericError::PrecisionLoss);
        }

        let raw = scaled.to_i128().ok_or(NumericError::Overflow)?;
        let rep = num_traits::cast::<i128, R>(raw).ok_or(if raw < 0 {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        })?;
        if rep != R::zero() && rep.used_digits() > format.digits() {
            return Err(out_of_range(rep));
        }
        Ok(Self { rep, format })
    }

    /// Parse a decimal string such as `"-3.25"` into `format`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the string is not a decimal number, plus
    /// the errors of [`ElasticNumber::from_decimal`].
    pub fn parse(s: &str, format: ElasticFormat) -> NumericResult<Self> {
        let d = Decimal::from_str(s.trim()).map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(d, format)
    }
}

impl<R: Rep> From<R> for ElasticNumber<R> {
    /// Integer literal conversion: the format holds exactly the literal's
    /// significant digits.
    ///
    /// `R::MIN` needs one digit more than `R` has, so every checked
    /// operation on it reports `FormatOverflow`.
    #[inline]
    fn from(rep: R) -> Self {
        Self {
            rep,
            format: ElasticFormat::integer(rep.used_digits()),
        }
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl<R: SignedRep> ElasticNumber<R> {
    /// Addition in [`ElasticFormat::sum`] of the operand formats.
    ///
    /// # Errors
    /// Returns `FormatOverflow` if the promoted format does not fit `R`.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        let format = ElasticFormat::sum(self.format, rhs.format);
        let shape = ElasticShape::<R>::new(format)?;
        Ok(shape.from_rep(self.aligned(format) + rhs.aligned(format)))
    }

    /// Subtraction in [`ElasticFormat::difference`] of the operand formats.
    ///
    /// # Errors
    /// Returns `FormatOverflow` if the promoted format does not fit `R`.
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        let format = ElasticFormat::difference(self.format, rhs.format);
        let shape = ElasticShape::<R>::new(format)?;
        Ok(shape.from_rep(self.aligned(format) - rhs.aligned(format)))
    }

    /// Multiplication in [`ElasticFormat::product`] of the operand formats.
    ///
    /// The raw product already carries the summed fractional digits, so no
    /// rescaling is needed.
    ///
    /// # Errors
    /// Returns `FormatOverflow` if the promoted format does not fit `R`.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let format = ElasticFormat::product(self.format, rhs.format);
        let shape = ElasticShape::<R>::new(format)?;
        Ok(shape.from_rep(self.rep * rhs.rep))
    }

    /// Division in [`ElasticFormat::quotient`] of the operand formats,
    /// truncating toward zero.
    ///
    /// The dividend is widened by all of the divisor's digits before the raw
    /// division, which lands the quotient on the promoted binary point.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `FormatOverflow` if the promoted format does not fit `R`
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            tracing::debug!(dividend = %self, "elastic division by zero");
            return Err(NumericError::DivisionByZero);
        }
        let format = ElasticFormat::quotient(self.format, rhs.format);
        let shape = ElasticShape::<R>::new(format)?;
        let widened = self.rep << rhs.format.digits() as usize;
        Ok(shape.from_rep(widened / rhs.rep))
    }

    /// Negation in the operand's own format.
    ///
    /// # Errors
    /// - `FormatOverflow` if the format does not fit `R`
    /// - `Overflow` if the raw value is `R::MIN`
    pub fn checked_neg(self) -> NumericResult<Self> {
        let shape = ElasticShape::<R>::new(self.format)?;
        if self.rep == R::min_value() {
            return Err(NumericError::Overflow);
        }
        Ok(shape.from_rep(-self.rep))
    }

    /// Raw value moved onto the binary point of a format with at least as
    /// many fractional digits.
    #[inline]
    fn aligned(self, format: ElasticFormat) -> R {
        let shift = format.fractional_digits() - self.format.fractional_digits();
        self.rep << shift as usize
    }
}

// Infallible operators for ergonomics (panic when the promoted format does
// not fit the representation - use checked_* to handle that case)
macro_rules! impl_elastic_op {
    ($($Op:ident, $method:ident, $checked:ident, $what:literal);* $(;)?) => {
        $(
            impl<R: SignedRep> $Op for ElasticNumber<R> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self::Output {
                    self.$checked(rhs).expect($what)
                }
            }

            impl<R: SignedRep> $Op<R> for ElasticNumber<R> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: R) -> Self::Output {
                    self.$checked(ElasticNumber::from(rhs)).expect($what)
                }
            }
        )*
    };
}

impl_elastic_op!(
    Add, add, checked_add, "ElasticNumber addition format overflow";
    Sub, sub, checked_sub, "ElasticNumber subtraction format overflow";
    Mul, mul, checked_mul, "ElasticNumber multiplication format overflow";
    Div, div, checked_div, "ElasticNumber division failed";
);

macro_rules! impl_literal_lhs_op {
    ($($T:ty),*) => {
        $(
            impl Add<ElasticNumber<$T>> for $T {
                type Output = ElasticNumber<$T>;

                #[inline]
                fn add(self, rhs: ElasticNumber<$T>) -> Self::Output {
                    ElasticNumber::from(self) + rhs
                }
            }

            impl Sub<ElasticNumber<$T>> for $T {
                type Output = ElasticNumber<$T>;

                #[inline]
                fn sub(self, rhs: ElasticNumber<$T>) -> Self::Output {
                    ElasticNumber::from(self) - rhs
                }
            }

            impl Mul<ElasticNumber<$T>> for $T {
                type Output = ElasticNumber<$T>;

                #[inline]
                fn mul(self, rhs: ElasticNumber<$T>) -> Self::Output {
                    ElasticNumber::from(self) * rhs
                }
            }

            impl Div<ElasticNumber<$T>> for $T {
                type Output = ElasticNumber<$T>;

                #[inline]
                fn div(self, rhs: ElasticNumber<$T>) -> Self::Output {
                    ElasticNumber::from(self) / rhs
                }
            }
        )*
    };
}

impl_literal_lhs_op!(i8, i16, i32, i64, i128);

impl<R: SignedRep> Neg for ElasticNumber<R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("ElasticNumber negation failed")
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl<R: Rep> ElasticNumber<R> {
    /// Compare values across formats.
    ///
    /// The operand with fewer fractional digits is compared against the
    /// other one split at its binary point, so neither raw value has to be
    /// shifted left into a wider representation.
    fn compare(&self, other: &Self) -> Ordering {
        let fa = self.format.fractional_digits();
        let fb = other.format.fractional_digits();
        match fa.cmp(&fb) {
            Ordering::Equal => self.rep.cmp(&other.rep),
            Ordering::Less => cmp_scaled(self.rep, other.rep, (fb - fa) as u32),
            Ordering::Greater => cmp_scaled(other.rep, self.rep, (fa - fb) as u32).reverse(),
        }
    }
}

impl<R: Rep> PartialEq for ElasticNumber<R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<R: Rep> Eq for ElasticNumber<R> {}

impl<R: Rep> PartialOrd for ElasticNumber<R> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<R: Rep> Ord for ElasticNumber<R> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<R: Rep> fmt::Debug for ElasticNumber<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ElasticNumber<{}, {}>({}, raw={})",
            self.format.digits(),
            self.format.exponent(),
            self,
            self.rep
        )
    }
}

impl<R: Rep> fmt::Display for ElasticNumber<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Ok(d) => write!(f, "{}", d),
            Err(_) => write!(f, "{}", self.to_f64()),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

#[inline]
fn pow2_f64(exponent: i32) -> f64 {
    2f64.powi(exponent)
}

/// 2^n as a `Decimal`.
fn pow2_decimal(n: u32) -> NumericResult<Decimal> {
    let two = Decimal::from(2u8);
    (0..n).try_fold(Decimal::ONE, |acc, _| {
        acc.checked_mul(two).ok_or(NumericError::Overflow)
    })
}

#[inline]
fn out_of_range<R: Rep>(value: R) -> NumericError {
    if value < R::zero() {
        NumericError::Underflow
    } else {
        NumericError::Overflow
    }
}

/// `rep / 2^shift` rounded to nearest, ties toward positive infinity.
///
/// Adds bit `shift - 1` to the floored quotient instead of adding half
/// before shifting, which cannot overflow.
fn round_shift_right<R: Rep>(rep: R, shift: u32) -> R {
    if shift >= R::BITS {
        return R::zero();
    }
    let floor = rep >> shift as usize;
    let half_bit = (rep >> (shift - 1) as usize) & R::one();
    floor + half_bit
}

/// Compare `a × 2^shift` with `b` without shifting `a`.
fn cmp_scaled<R: Rep>(a: R, b: R, shift: u32) -> Ordering {
    let zero = R::zero();
    let (quotient, has_remainder) = if shift >= R::BITS {
        if b < zero {
            (zero - R::one(), true)
        } else {
            (zero, b != zero)
        }
    } else {
        let quotient = b >> shift as usize;
        (quotient, b - (quotient << shift as usize) != zero)
    };

    match a.cmp(&quotient) {
        Ordering::Equal if has_remainder => Ordering::Less,
        ordering => ordering,
    }
}
