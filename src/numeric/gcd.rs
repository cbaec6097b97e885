// ============================================================================
// Greatest Common Divisor
// ============================================================================

use super::rep::Rep;

/// Calculates the greatest common divisor of `a` and `b` with the Euclidean
/// algorithm. The result is always non-negative.
///
/// `gcd(0, 0)` is `0`. When the divisor is the magnitude of `R::MIN`, as in
/// `gcd(R::MIN, 0)` or `gcd(R::MIN, R::MIN)`, it is not representable and the
/// result wraps to `R::MIN`. Dividing either operand by that result is still
/// exact.
#[inline]
pub fn gcd<R: Rep>(a: R, b: R) -> R {
    let mut m = a;
    let mut n = b;
    while n != R::zero() {
        // R::MIN % -1 overflows
        let rem = if R::SIGNED && n == !R::zero() {
            R::zero()
        } else {
            m % n
        };
        m = n;
        n = rem;
    }
    if m < R::zero() {
        R::from_wide(m.to_wide().wrapping_neg())
    } else {
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_positive() {
        assert_eq!(gcd(1024i64, 360), 8);
        assert_eq!(gcd(360i64, 1024), 8);
        assert_eq!(gcd(17u32, 5), 1);
        assert_eq!(gcd(12u8, 18), 6);
    }

    #[test]
    fn test_gcd_negative_operands() {
        assert_eq!(gcd(-6i32, -3), 3);
        assert_eq!(gcd(-6i32, 3), 3);
        assert_eq!(gcd(6i32, -3), 3);
        assert_eq!(gcd(-4i32, 18), 2);
    }

    #[test]
    fn test_gcd_zero() {
        assert_eq!(gcd(0i32, 5), 5);
        assert_eq!(gcd(5i32, 0), 5);
        assert_eq!(gcd(0i32, -5), 5);
        assert_eq!(gcd(0i32, 0), 0);
    }

    #[test]
    fn test_gcd_at_signed_extremes() {
        assert_eq!(gcd(i32::MIN, -1), 1);
        assert_eq!(gcd(-1, i32::MIN), 1);
        assert_eq!(gcd(i64::MIN, 6), 2);
        assert_eq!(gcd(i8::MIN, -1), 1);
        // 2^31 does not fit i32
        assert_eq!(gcd(i32::MIN, 0), i32::MIN);
        assert_eq!(gcd(i32::MIN, i32::MIN), i32::MIN);
        assert_eq!(gcd(u32::MAX, 1), 1);
    }
}
