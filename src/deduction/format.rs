// ============================================================================
// Elastic Formats
// Digit budgets of elastic numbers and how each operator grows them
// ============================================================================

use crate::numeric::{NumericError, NumericResult, Rep};
use std::cmp::max;
use std::fmt;

/// Digit budget of an elastic number: `digits` binary digits scaled by
/// `2^exponent`.
///
/// The integer-digit count is `digits + exponent` and the fractional-digit
/// count is `-exponent`; either may be negative as long as their sum, the
/// total digit count, is at least one.
///
/// # Example
/// ```
/// use composite_numerics::deduction::ElasticFormat;
///
/// let format = ElasticFormat::new(30, -16).unwrap();
/// assert_eq!(format.integer_digits(), 14);
/// assert_eq!(format.fractional_digits(), 16);
///
/// let product = ElasticFormat::product(format, format);
/// assert_eq!(product.integer_digits(), 28);
/// assert_eq!(product.fractional_digits(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElasticFormat {
    digits: u32,
    exponent: i32,
}

impl ElasticFormat {
    /// Q15.16: 15 integer digits and 16 fractional digits.
    pub const Q15_16: Self = Self::from_digit_counts(15, 16);

    /// Q31.32: 31 integer digits and 32 fractional digits.
    pub const Q31_32: Self = Self::from_digit_counts(31, 32);

    /// 30 digits with exponent -16, the storage format of fixed-point FFT
    /// samples and twiddle factors.
    pub const FFT_DEFAULT: Self = Self::from_digit_counts(14, 16);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a format of `digits` digits scaled by `2^exponent`.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if `digits` is zero.
    pub const fn new(digits: u32, exponent: i32) -> NumericResult<Self> {
        if digits == 0 {
            return Err(NumericError::InvalidFormat);
        }
        Ok(Self { digits, exponent })
    }

    /// Create a format from its integer- and fractional-digit counts.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if the counts add up to less than one digit.
    pub const fn from_parts(integer_digits: i32, fractional_digits: i32) -> NumericResult<Self> {
        if integer_digits + fractional_digits < 1 {
            return Err(NumericError::InvalidFormat);
        }
        Ok(Self::from_digit_counts(integer_digits, fractional_digits))
    }

    /// Integer format with `digits` digits and no fractional part.
    #[inline]
    pub const fn integer(digits: u32) -> Self {
        Self {
            digits: if digits == 0 { 1 } else { digits },
            exponent: 0,
        }
    }

    /// Counts that are already known to add up to at least one digit.
    #[inline]
    const fn from_digit_counts(integer_digits: i32, fractional_digits: i32) -> Self {
        Self {
            digits: (integer_digits + fractional_digits) as u32,
            exponent: -fractional_digits,
        }
    }

    /// Builder method: same digit count, different exponent.
    #[inline]
    pub const fn with_exponent(self, exponent: i32) -> Self {
        Self {
            digits: self.digits,
            exponent,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Total number of value digits.
    #[inline]
    pub const fn digits(self) -> u32 {
        self.digits
    }

    /// Power of two the raw representation is scaled by.
    #[inline]
    pub const fn exponent(self) -> i32 {
        self.exponent
    }

    /// Digits left of the binary point.
    #[inline]
    pub const fn integer_digits(self) -> i32 {
        self.digits as i32 + self.exponent
    }

    /// Digits right of the binary point.
    #[inline]
    pub const fn fractional_digits(self) -> i32 {
        -self.exponent
    }

    /// Whether a raw representation `R` has a value bit for every digit.
    #[inline]
    pub fn fits<R: Rep>(self) -> bool {
        self.digits <= R::DIGITS
    }

    /// Check that `R` can carry this format.
    ///
    /// # Errors
    /// Returns `FormatOverflow` if the format has more digits than `R` has
    /// value bits.
    pub fn validate<R: Rep>(self) -> NumericResult<()> {
        if self.fits::<R>() {
            Ok(())
        } else {
            tracing::debug!(
                format = %self,
                available = R::DIGITS,
                "elastic format does not fit its representation"
            );
            Err(NumericError::FormatOverflow {
                digits: self.digits,
                available: R::DIGITS,
            })
        }
    }

    // ========================================================================
    // Promotion Rules
    // ========================================================================

    /// Format of `a + b`: one extra integer digit absorbs the carry.
    #[inline]
    pub fn sum(a: Self, b: Self) -> Self {
        Self::from_digit_counts(
            max(a.integer_digits(), b.integer_digits()) + 1,
            max(a.fractional_digits(), b.fractional_digits()),
        )
    }

    /// Format of `a - b`: one extra integer digit absorbs the borrow.
    #[inline]
    pub fn difference(a: Self, b: Self) -> Self {
        Self::sum(a, b)
    }

    /// Format of `a * b`: digit counts add up.
    #[inline]
    pub fn product(a: Self, b: Self) -> Self {
        Self::from_digit_counts(
            a.integer_digits() + b.integer_digits(),
            a.fractional_digits() + b.fractional_digits(),
        )
    }

    /// Format of `a / b`: the smallest divisor magnifies the dividend by the
    /// divisor's fractional digits, the largest divisor shrinks it by the
    /// divisor's integer digits.
    #[inline]
    pub fn quotient(a: Self, b: Self) -> Self {
        Self::from_digit_counts(
            a.integer_digits() + b.fractional_digits(),
            a.fractional_digits() + b.integer_digits(),
        )
    }

    /// Format both operands of a comparison are aligned to.
    #[inline]
    pub fn common(a: Self, b: Self) -> Self {
        Self::from_digit_counts(
            max(a.integer_digits(), b.integer_digits()),
            max(a.fractional_digits(), b.fractional_digits()),
        )
    }
}

impl fmt::Display for ElasticFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "elastic<{}, {}>", self.digits, self.exponent)
    }
}
