//! Simulation dynamics: the equations of motion and energy diagnostics.

pub mod energy;
pub mod integrator;

pub use energy::{kinetic_energy, potential_energy, total_energy};
pub use integrator::{angular_accelerations, step};
