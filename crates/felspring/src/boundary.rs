//! Residue-encoded step contract.
//!
//! Mirrors the reference deployment where the integrator is invoked across a
//! boundary that only accepts non-negative field elements: every signed
//! component crosses as `x + P` when negative and is decoded by the
//! half-range rule on return. Coordinates are interleaved per degree of
//! freedom, `[q0, v0, q1, v1, ...]`, matching the reference call layout
//! `(t, dt, x, xd, ...)`.

use num_bigint::BigUint;

use felspring_math::{from_residue, to_residue};
use felspring_model::{Model, Oscillator, State};

use crate::{Result, Rk4Solver, SimError, Solver};

/// One RK4 step over residue-encoded coordinates.
///
/// `coords` must carry `2 * dof` components. The returned vector has the
/// same arity and layout; time advancement is the caller's job, as in the
/// reference contract.
pub fn step_felts(
    oscillator: &Oscillator,
    t: &BigUint,
    dt: &BigUint,
    coords: &[BigUint],
) -> Result<Vec<BigUint>> {
    let dof = oscillator.dof();
    if coords.len() != 2 * dof {
        return Err(SimError::Arity {
            expected: 2 * dof,
            got: coords.len(),
        });
    }

    let mut q = Vec::with_capacity(dof);
    let mut v = Vec::with_capacity(dof);
    for pair in coords.chunks_exact(2) {
        q.push(from_residue(&pair[0])?);
        v.push(from_residue(&pair[1])?);
    }

    let model = Model {
        oscillator: oscillator.clone(),
        dt: from_residue(dt)?,
    };
    let mut state = State::new(q, v, from_residue(t)?);
    Rk4Solver.step(&model, &mut state)?;

    let mut out = Vec::with_capacity(2 * dof);
    for i in 0..dof {
        out.push(to_residue(state.q[i]));
        out.push(to_residue(state.v[i]));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use felspring_math::to_fixed;

    #[test]
    fn arity_mismatch_is_rejected() {
        let osc = Oscillator::coupled(1.0, 1.0, 2.0, 1000.0);
        let t = BigUint::from(0u8);
        let dt = BigUint::from(100u8);
        let coords = vec![BigUint::from(0u8); 3];
        assert_eq!(
            step_felts(&osc, &t, &dt, &coords),
            Err(SimError::Arity {
                expected: 4,
                got: 3
            })
        );
    }

    #[test]
    fn simple_step_matches_signed_path() {
        let osc = Oscillator::simple(1.0, 1.0);
        let model = Model::new(osc.clone(), 0.01);
        let mut state = State::from_real(&[100.0], &[0.0]);
        Rk4Solver.step(&model, &mut state).unwrap();

        let coords = [to_residue(to_fixed(100.0)), to_residue(0)];
        let out = step_felts(
            &osc,
            &BigUint::from(0u8),
            &to_residue(to_fixed(0.01)),
            &coords,
        )
        .unwrap();

        assert_eq!(out[0], to_residue(state.q[0]));
        assert_eq!(out[1], to_residue(state.v[0]));
        // the velocity went negative, so its residue sits in the upper half
        assert!(out[1] > *felspring_math::PRIME_HALF);
    }
}
