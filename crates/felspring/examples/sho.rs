//! Simple harmonic oscillator driven by the fixed-point RK4 solver.
//!
//! Reproduces the reference run: x0 = 100, at rest, k/m = 1, dt = 0.01.

use felspring::{EnergyMonitor, Model, Oscillator, Simulator, State, TrajectoryRecorder};

fn main() {
    println!("=== Fixed-point RK4: simple harmonic oscillator ===\n");

    let model = Model::new(Oscillator::simple(1.0, 1.0), 0.01);
    let mut state = State::from_real(&[100.0], &[0.0]);
    let monitor = EnergyMonitor::new(&model, &state);

    let sim = Simulator::rk4();
    let mut recorder = TrajectoryRecorder::new();

    // one full period: omega = 1 -> T = 2*pi
    sim.simulate_recorded(&model, &mut state, 628, &mut recorder)
        .expect("well-configured model");

    for (i, x) in recorder.positions_real().iter().enumerate().step_by(50) {
        println!("t = {:6.2}  x = {:9.4}", recorder.times_real()[i], x[0]);
    }

    println!(
        "\nafter one period: x = {:.4}, xd = {:.4}",
        state.positions()[0],
        state.velocities()[0]
    );
    println!(
        "relative energy drift: {:.2e}",
        monitor.relative_drift(&model, &state)
    );
}
