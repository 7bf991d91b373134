//! felspring — deterministic fixed-point RK4 for spring-mass systems.
//!
//! This is the umbrella crate: it provides the `Solver` implementations and
//! the `Simulator` driver, and re-exports core types from the sub-crates.
//! All arithmetic runs on scaled integers with uniform floor rounding, so a
//! step is a pure function of its inputs and bit-identical everywhere.

pub use felspring_math::{
    self, Fixed, MathError, SCALE_FP, div_fp, floor_div, from_fixed, from_residue, mul_fp,
    to_fixed, to_residue,
};
pub use felspring_model::{self, Model, Oscillator, State};

pub mod boundary;
pub mod energy;
pub mod trajectory;

pub use energy::{EnergyMonitor, total_energy};
pub use trajectory::TrajectoryRecorder;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("expected {expected} boundary components, got {got}")]
    Arity { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;

/// Pluggable solver trait.
///
/// Implementations define how to advance the simulation by one timestep.
pub trait Solver {
    /// Advance state by `model.dt`. Reads from `state` and writes the
    /// result back.
    fn step(&self, model: &Model, state: &mut State) -> Result<()>;
}

/// Advance each component by `floor(mul_fp(dt, slope) / denom)`.
///
/// `denom` is 2 for the RK4 midpoint stages and 1 for the full stage.
/// The multiply by `dt` happens before the stage division, so each term
/// floors exactly once.
fn advance(base: &[Fixed], slope: &[Fixed], dt: Fixed, denom: Fixed) -> Vec<Fixed> {
    base.iter()
        .zip(slope)
        .map(|(b, s)| b + floor_div(mul_fp(dt, *s), denom))
        .collect()
}

/// `base + floor(mul_fp(dt, k1 + 2k2 + 2k3 + k4) / 6)`, per component.
fn combine(
    base: &[Fixed],
    k1: &[Fixed],
    k2: &[Fixed],
    k3: &[Fixed],
    k4: &[Fixed],
    dt: Fixed,
) -> Vec<Fixed> {
    (0..base.len())
        .map(|i| {
            let weighted = k1[i] + 2 * k2[i] + 2 * k3[i] + k4[i];
            base[i] + floor_div(mul_fp(dt, weighted), 6)
        })
        .collect()
}

/// Classical 4th-order Runge-Kutta integrator.
///
/// Position's derivative is velocity, velocity's derivative is the model's
/// acceleration function. Every intermediate division floors, so the step
/// is exactly reproducible.
pub struct Rk4Solver;

impl Solver for Rk4Solver {
    fn step(&self, model: &Model, state: &mut State) -> Result<()> {
        let dt = model.dt;
        let osc = &model.oscillator;

        // k1: derivatives at the start state
        let a1 = osc.acceleration(&state.q, &state.v)?;

        // k2: advance dt/2 along k1
        let q2 = advance(&state.q, &state.v, dt, 2);
        let v2 = advance(&state.v, &a1, dt, 2);
        let a2 = osc.acceleration(&q2, &v2)?;

        // k3: advance dt/2 along k2
        let q3 = advance(&state.q, &v2, dt, 2);
        let v3 = advance(&state.v, &a2, dt, 2);
        let a3 = osc.acceleration(&q3, &v3)?;

        // k4: advance dt along k3
        let q4 = advance(&state.q, &v3, dt, 1);
        let v4 = advance(&state.v, &a3, dt, 1);
        let a4 = osc.acceleration(&q4, &v4)?;

        state.q = combine(&state.q, &state.v, &v2, &v3, &v4, dt);
        state.v = combine(&state.v, &a1, &a2, &a3, &a4, dt);
        state.time += dt;
        Ok(())
    }
}

/// Semi-implicit Euler integrator.
///
/// Cheap reference integrator: first order, noticeably worse energy
/// behavior than RK4 at the same `dt`. Useful for cross-checking.
pub struct SemiImplicitEulerSolver;

impl Solver for SemiImplicitEulerSolver {
    fn step(&self, model: &Model, state: &mut State) -> Result<()> {
        let dt = model.dt;
        let a = model.oscillator.acceleration(&state.q, &state.v)?;

        // update velocity first, then position with the new velocity
        state.v = advance(&state.v, &a, dt, 1);
        state.q = advance(&state.q, &state.v, dt, 1);
        state.time += dt;
        Ok(())
    }
}

/// Main simulation driver.
pub struct Simulator {
    solver: Box<dyn Solver>,
}

impl Simulator {
    /// Create a simulator with the RK4 solver.
    pub fn rk4() -> Self {
        Self {
            solver: Box::new(Rk4Solver),
        }
    }

    /// Create a simulator with the semi-implicit Euler solver.
    pub fn euler() -> Self {
        Self {
            solver: Box::new(SemiImplicitEulerSolver),
        }
    }

    /// Create a simulator with a custom solver.
    pub fn with_solver(solver: Box<dyn Solver>) -> Self {
        Self { solver }
    }

    /// Advance simulation by one timestep.
    pub fn step(&self, model: &Model, state: &mut State) -> Result<()> {
        self.solver.step(model, state)
    }

    /// Run simulation for `n` steps.
    pub fn simulate(&self, model: &Model, state: &mut State, n: usize) -> Result<()> {
        for _ in 0..n {
            self.step(model, state)?;
        }
        Ok(())
    }

    /// Run simulation for `n` steps, recording every state (including the
    /// initial one) into the recorder.
    pub fn simulate_recorded(
        &self,
        model: &Model,
        state: &mut State,
        n: usize,
        recorder: &mut TrajectoryRecorder,
    ) -> Result<()> {
        recorder.record(state);
        for _ in 0..n {
            self.step(model, state)?;
            recorder.record(state);
        }
        Ok(())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::rk4()
    }
}
