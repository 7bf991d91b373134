//! Mechanical-energy bookkeeping.
//!
//! Energy is computed on de-scaled values; it is a diagnostic for numeric
//! drift, not part of the integer stepping path.

use felspring_math::from_fixed;
use felspring_model::{Model, Oscillator, State};

/// Total mechanical energy (kinetic plus spring potential) of the state.
pub fn total_energy(model: &Model, state: &State) -> f64 {
    let q = state.positions();
    let v = state.velocities();

    match &model.oscillator {
        Oscillator::Simple { k, m, .. } => {
            let (k, m) = (from_fixed(*k), from_fixed(*m));
            0.5 * m * v[0] * v[0] + 0.5 * k * q[0] * q[0]
        }
        Oscillator::Planar { k, m, width, .. } => {
            let (k, m, w) = (from_fixed(*k), from_fixed(*m), from_fixed(*width));
            let kinetic = 0.5 * m * (v[0] * v[0] + v[1] * v[1]);
            let anchors = [(0.0, 0.0), (w, 0.0), (w, w), (0.0, w)];
            let potential: f64 = anchors
                .iter()
                .map(|(ax, ay)| {
                    let (dx, dy) = (q[0] - ax, q[1] - ay);
                    0.5 * k * (dx * dx + dy * dy)
                })
                .sum();
            kinetic + potential
        }
        Oscillator::Coupled {
            k1,
            k2,
            k3,
            m1,
            m2,
            width,
            ..
        } => {
            let (k1, k2, k3) = (from_fixed(*k1), from_fixed(*k2), from_fixed(*k3));
            let (m1, m2, w) = (from_fixed(*m1), from_fixed(*m2), from_fixed(*width));
            let kinetic = 0.5 * m1 * v[0] * v[0] + 0.5 * m2 * v[1] * v[1];
            let stretch = q[1] - q[0];
            let potential = 0.5 * k1 * q[0] * q[0]
                + 0.5 * k2 * stretch * stretch
                + 0.5 * k3 * (q[1] - w) * (q[1] - w);
            kinetic + potential
        }
    }
}

/// Tracks relative energy drift against a baseline taken at run start.
#[derive(Debug, Clone)]
pub struct EnergyMonitor {
    baseline: f64,
}

impl EnergyMonitor {
    /// Capture the baseline energy of the initial state.
    pub fn new(model: &Model, state: &State) -> Self {
        Self {
            baseline: total_energy(model, state),
        }
    }

    /// Baseline energy captured at construction.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Relative energy error of the current state: `|E - E0| / |E0|`
    /// (absolute error when the baseline is zero).
    pub fn relative_drift(&self, model: &Model, state: &State) -> f64 {
        let energy = total_energy(model, state);
        if self.baseline.abs() > 1e-12 {
            (energy - self.baseline).abs() / self.baseline.abs()
        } else {
            (energy - self.baseline).abs()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn simple_energy_at_rest_is_potential_only() {
        let model = Model::new(Oscillator::simple(1.0, 1.0), 0.01);
        let state = State::from_real(&[100.0], &[0.0]);
        assert_relative_eq!(total_energy(&model, &state), 5000.0, epsilon = 1e-9);
    }

    #[test]
    fn coupled_energy_counts_all_three_springs() {
        let model = Model::new(Oscillator::coupled(1.0, 1.0, 2.0, 1000.0), 0.01);
        let state = State::from_real(&[100.0, 900.0], &[0.0, 0.0]);
        // 0.5*(100^2 + 800^2 + 100^2)
        assert_relative_eq!(total_energy(&model, &state), 330_000.0, epsilon = 1e-9);
    }

    #[test]
    fn monitor_reports_zero_drift_for_unchanged_state() {
        let model = Model::new(Oscillator::simple(1.0, 1.0), 0.01);
        let state = State::from_real(&[100.0], &[0.0]);
        let monitor = EnergyMonitor::new(&model, &state);
        assert_eq!(monitor.relative_drift(&model, &state), 0.0);
    }
}
