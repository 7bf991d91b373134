//! Model and state types for the felspring integrator.
//!
//! `Model` is the static description of a spring-mass system (variant,
//! spring constants, masses, timestep). `State` is the per-step simulation
//! state: scaled-integer positions, velocities, and time.

pub mod oscillator;
pub mod state;

pub use oscillator::Oscillator;
pub use state::State;

use felspring_math::{Fixed, to_fixed};
use serde::{Deserialize, Serialize};

/// Static description of a simulation run: the physical system plus the
/// constant timestep. Created once at simulation start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// The spring-mass system being integrated.
    pub oscillator: Oscillator,
    /// Scaled timestep, constant for the life of the run.
    pub dt: Fixed,
}

impl Model {
    /// Build a model from an oscillator and a real-valued timestep.
    pub fn new(oscillator: Oscillator, dt: f64) -> Self {
        Self {
            oscillator,
            dt: to_fixed(dt),
        }
    }

    /// Number of degrees of freedom of the underlying system.
    pub fn dof(&self) -> usize {
        self.oscillator.dof()
    }
}
