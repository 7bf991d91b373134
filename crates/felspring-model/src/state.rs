//! Simulation state.

use felspring_math::{Fixed, from_fixed, to_fixed};
use serde::{Deserialize, Serialize};

/// Instantaneous configuration of a mass system.
///
/// Positions and velocities are fixed-point scaled integers, one entry per
/// degree of freedom. A solver step consumes a state and writes the next
/// one back; nothing else mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Scaled positions.
    pub q: Vec<Fixed>,
    /// Scaled velocities.
    pub v: Vec<Fixed>,
    /// Scaled simulation time.
    pub time: Fixed,
}

impl State {
    /// Build a state from already-scaled components.
    pub fn new(q: Vec<Fixed>, v: Vec<Fixed>, time: Fixed) -> Self {
        Self { q, v, time }
    }

    /// Build a state from real-valued positions and velocities at `t = 0`.
    pub fn from_real(q: &[f64], v: &[f64]) -> Self {
        Self {
            q: q.iter().copied().map(to_fixed).collect(),
            v: v.iter().copied().map(to_fixed).collect(),
            time: 0,
        }
    }

    /// De-scaled positions.
    pub fn positions(&self) -> Vec<f64> {
        self.q.iter().copied().map(from_fixed).collect()
    }

    /// De-scaled velocities.
    pub fn velocities(&self) -> Vec<f64> {
        self.v.iter().copied().map(from_fixed).collect()
    }

    /// De-scaled simulation time.
    pub fn time_real(&self) -> f64 {
        from_fixed(self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_real_scales_components() {
        let s = State::from_real(&[100.0, 900.0], &[0.0, -1.5]);
        assert_eq!(s.q, vec![1_000_000, 9_000_000]);
        assert_eq!(s.v, vec![0, -15_000]);
        assert_eq!(s.time, 0);
    }

    #[test]
    fn descaling_inverts_from_real() {
        let s = State::from_real(&[150.0, 250.0], &[0.5, -0.25]);
        assert_eq!(s.positions(), vec![150.0, 250.0]);
        assert_eq!(s.velocities(), vec![0.5, -0.25]);
    }
}
