//! Two coupled masses between walls, stepped through the felt boundary.
//!
//! Demonstrates the full reference call shape: every component is encoded
//! as a non-negative field residue before the step and decoded by the
//! half-range rule afterwards, exactly as the prime-field evaluator expects.

use felspring::boundary::step_felts;
use felspring::{Model, Oscillator, State, from_fixed, from_residue, to_residue};
use num_bigint::BigUint;

fn main() {
    println!("=== Coupled oscillator over the residue boundary ===\n");

    let model = Model::new(Oscillator::coupled(1.0, 1.0, 2.0, 1000.0), 0.01);
    let state = State::from_real(&[100.0, 900.0], &[0.0, 0.0]);

    let mut t = BigUint::from(0u8);
    let dt = to_residue(model.dt);
    let mut coords = vec![
        to_residue(state.q[0]),
        to_residue(state.v[0]),
        to_residue(state.q[1]),
        to_residue(state.v[1]),
    ];

    for step in 1..=300 {
        coords = step_felts(&model.oscillator, &t, &dt, &coords)
            .expect("well-formed coordinates");
        t += model.dt as u128;

        if step % 30 == 0 {
            let x1 = from_fixed(from_residue(&coords[0]).expect("reduced residue"));
            let x2 = from_fixed(from_residue(&coords[2]).expect("reduced residue"));
            println!("step {step:4}  x1 = {x1:9.4}  x2 = {x2:9.4}");
        }
    }
}
