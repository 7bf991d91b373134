//! Field-residue encoding for prime-field evaluators.
//!
//! The reference execution environment only materializes non-negative
//! residues modulo a 251-bit prime. A negative fixed-point value crosses
//! that boundary as `x + P`, and any residue at or above `P/2` coming back
//! denotes a negative original. The integrator itself never sees residues;
//! this module is the adapter at the edge.

use std::sync::LazyLock;

use num_bigint::BigUint;

use crate::{Fixed, MathError, Result};

/// The 251-bit field prime, `2^251 + 17·2^192 + 1`.
pub static PRIME: LazyLock<BigUint> =
    LazyLock::new(|| (BigUint::from(1u8) << 251) + (BigUint::from(17u8) << 192) + 1u8);

/// Half the prime. Residues at or above this bound decode as negative.
pub static PRIME_HALF: LazyLock<BigUint> = LazyLock::new(|| &*PRIME >> 1);

/// Encode a signed fixed-point value as a non-negative residue.
pub fn to_residue(x: Fixed) -> BigUint {
    if x >= 0 {
        BigUint::from(x as u128)
    } else {
        &*PRIME - BigUint::from(x.unsigned_abs())
    }
}

/// Decode a residue back to a signed fixed-point value.
///
/// Rejects unreduced residues and magnitudes outside `i128`. Every value
/// produced by [`to_residue`] round-trips: the full `i128` range sits far
/// inside `(-P/2, P/2)`.
pub fn from_residue(r: &BigUint) -> Result<Fixed> {
    if *r >= *PRIME {
        return Err(MathError::InvalidResidue);
    }
    if *r < *PRIME_HALF {
        let mag = u128::try_from(r).map_err(|_| MathError::OutOfRange)?;
        i128::try_from(mag).map_err(|_| MathError::OutOfRange)
    } else {
        let mag = u128::try_from(&(&*PRIME - r)).map_err(|_| MathError::OutOfRange)?;
        if mag > i128::MAX as u128 + 1 {
            return Err(MathError::OutOfRange);
        }
        // mag == 2^127 wraps to exactly i128::MIN
        Ok((mag as i128).wrapping_neg())
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trip_all_i128(x in any::<i128>()) {
            prop_assert_eq!(from_residue(&to_residue(x)).unwrap(), x);
        }

        #[test]
        fn encoding_is_reduced(x in any::<i128>()) {
            prop_assert!(to_residue(x) < *PRIME);
        }
    }
}
