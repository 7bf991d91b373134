//! Scaled-integer arithmetic with uniform floor rounding.

use crate::{MathError, Result};

/// Fixed-point values are `i128` scaled by [`SCALE_FP`].
pub type Fixed = i128;

/// Scale factor: four decimal digits of fraction.
pub const SCALE_FP: Fixed = 10_000;

/// Convert a real value to fixed point, rounding to the nearest unit.
#[inline]
pub fn to_fixed(real: f64) -> Fixed {
    (real * SCALE_FP as f64).round() as Fixed
}

/// Convert a fixed-point value back to a real.
#[inline]
pub fn from_fixed(scaled: Fixed) -> f64 {
    scaled as f64 / SCALE_FP as f64
}

/// Floor division. Rust `/` truncates toward zero; the integrator rounds
/// every intermediate division toward negative infinity so the result does
/// not depend on the sign of the operands.
#[inline]
pub fn floor_div(a: Fixed, b: Fixed) -> Fixed {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) { q - 1 } else { q }
}

/// Fixed-point multiply: `floor(a*b / SCALE_FP)`, preserving scale.
#[inline]
pub fn mul_fp(a: Fixed, b: Fixed) -> Fixed {
    floor_div(a * b, SCALE_FP)
}

/// Fixed-point divide: `floor(a*SCALE_FP / b)`, preserving scale.
///
/// A zero divisor is a misconfigured mass or spring constant and fails with
/// [`MathError::DivideByZero`].
#[inline]
pub fn div_fp(a: Fixed, b: Fixed) -> Result<Fixed> {
    if b == 0 {
        return Err(MathError::DivideByZero);
    }
    Ok(floor_div(a * SCALE_FP, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_round_trip() {
        assert_eq!(to_fixed(1.0), 10_000);
        assert_eq!(to_fixed(-0.5), -5_000);
        assert_eq!(to_fixed(100.0), 1_000_000);
        assert_eq!(from_fixed(to_fixed(3.25)), 3.25);
    }

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(floor_div(7, -2), -4);
        assert_eq!(floor_div(-7, -2), 3);
        assert_eq!(floor_div(-8, 2), -4);
    }

    #[test]
    fn mul_by_one_is_identity() {
        let one = to_fixed(1.0);
        for v in [-123_456_i128, -1, 0, 1, 999_950, 1_000_000] {
            assert_eq!(mul_fp(one, v), v);
        }
    }

    #[test]
    fn mul_floors() {
        // 0.0001 * 0.5 = 0.00005 -> floors to 0
        assert_eq!(mul_fp(1, 5_000), 0);
        // -0.0001 * 0.5 = -0.00005 -> floors to -1, not 0
        assert_eq!(mul_fp(-1, 5_000), -1);
    }

    #[test]
    fn div_fp_recovers_ratio() {
        let a = to_fixed(5.0);
        let b = to_fixed(2.0);
        assert_eq!(div_fp(a, b).unwrap(), to_fixed(2.5));
    }

    #[test]
    fn div_fp_by_zero_fails() {
        assert_eq!(div_fp(to_fixed(1.0), 0), Err(MathError::DivideByZero));
    }
}
