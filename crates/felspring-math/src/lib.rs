//! Fixed-point arithmetic and field-residue encoding for felspring.
//!
//! Every physical quantity is a scaled integer (`SCALE_FP = 10000`) so the
//! integrator computes bit-identically wherever exact integer division is
//! available. The `felt` module handles the boundary to prime-field
//! evaluators, which only accept non-negative residues modulo a 251-bit
//! prime.

pub mod felt;
pub mod fixed;

pub use felt::{PRIME, PRIME_HALF, from_residue, to_residue};
pub use fixed::{Fixed, SCALE_FP, div_fp, floor_div, from_fixed, mul_fp, to_fixed};

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("division by zero in fixed-point divide")]
    DivideByZero,

    #[error("residue is not reduced modulo the field prime")]
    InvalidResidue,

    #[error("decoded value does not fit the fixed-point range")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, MathError>;
