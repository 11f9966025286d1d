//! Mechanical energy diagnostics for a pendulum state.
//!
//! Heights are measured against the pivot, so values are directly
//! comparable across steps of one simulation. Diagnostics only; nothing
//! here feeds back into the integration.

use crate::core::PendulumState;

/// Kinetic energy of both bobs.
pub fn kinetic_energy(state: &PendulumState) -> f64 {
    let PendulumState {
        radius1: r1,
        radius2: r2,
        mass1: m1,
        mass2: m2,
        theta1,
        theta2,
        omega1,
        omega2,
        ..
    } = *state;

    // bob 2 rides on bob 1, hence the cross term in its squared speed
    let bob1_sq = r1 * r1 * omega1 * omega1;
    let bob2_sq = bob1_sq
        + r2 * r2 * omega2 * omega2
        + 2.0 * r1 * r2 * omega1 * omega2 * (theta1 - theta2).cos();

    0.5 * m1 * bob1_sq + 0.5 * m2 * bob2_sq
}

/// Potential energy of both bobs relative to the pivot plane.
pub fn potential_energy(state: &PendulumState) -> f64 {
    let y1 = state.radius1 * state.theta1.cos();
    let y2 = y1 + state.radius2 * state.theta2.cos();
    -state.gravity * (state.mass1 * y1 + state.mass2 * y2)
}

/// Total mechanical energy, kinetic plus potential.
pub fn total_energy(state: &PendulumState) -> f64 {
    kinetic_energy(state) + potential_energy(state)
}
