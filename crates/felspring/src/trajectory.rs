//! Trajectory recording for playback and analysis.

use felspring_math::{Fixed, from_fixed};
use felspring_model::State;

/// Records the `(q, v, time)` history of a run.
///
/// The integrator itself is stateless between calls; the recorder is how a
/// caller retains the finite, ordered history of one run for later playback.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryRecorder {
    /// Recorded scaled positions at each timestep.
    pub q_history: Vec<Vec<Fixed>>,
    /// Recorded scaled velocities at each timestep.
    pub v_history: Vec<Vec<Fixed>>,
    /// Scaled timestamps for each step.
    pub time_history: Vec<Fixed>,
}

impl TrajectoryRecorder {
    /// Create a new empty trajectory recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current state.
    pub fn record(&mut self, state: &State) {
        self.q_history.push(state.q.clone());
        self.v_history.push(state.v.clone());
        self.time_history.push(state.time);
    }

    /// Number of timesteps recorded.
    pub fn len(&self) -> usize {
        self.time_history.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.time_history.is_empty()
    }

    /// De-scaled position history, for rendering or plotting.
    pub fn positions_real(&self) -> Vec<Vec<f64>> {
        self.q_history
            .iter()
            .map(|q| q.iter().copied().map(from_fixed).collect())
            .collect()
    }

    /// De-scaled velocity history.
    pub fn velocities_real(&self) -> Vec<Vec<f64>> {
        self.v_history
            .iter()
            .map(|v| v.iter().copied().map(from_fixed).collect())
            .collect()
    }

    /// De-scaled timestamps.
    pub fn times_real(&self) -> Vec<f64> {
        self.time_history.iter().copied().map(from_fixed).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut rec = TrajectoryRecorder::new();
        assert!(rec.is_empty());

        rec.record(&State::new(vec![1_000_000], vec![0], 0));
        rec.record(&State::new(vec![999_950], vec![-10_000], 100));

        assert_eq!(rec.len(), 2);
        assert_eq!(rec.q_history[1], vec![999_950]);
        assert_eq!(rec.times_real(), vec![0.0, 0.01]);
        assert_eq!(rec.positions_real()[0], vec![100.0]);
    }
}
