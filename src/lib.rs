//! Pendulum Lab – a deterministic planar double-pendulum simulation core.
//!
//! The crate keeps the pendulum's mathematics free of rendering and
//! windowing concerns: [`PendulumState`] carries the geometric and dynamic
//! state, the [`dynamics`] module advances it with the classical equations
//! of motion, and [`Simulation`] wraps both behind the playback state
//! machine and fixed-rate step gate a frame loop expects.
//!
//! Angles are measured from the +Y axis of the simulation plane, increasing
//! toward +X, and `gravity` is the signed acceleration along +Y; every
//! Cartesian conversion in the crate uses that one convention.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod sim;
pub mod utils;

pub use glam::DVec2;

pub use crate::core::{PendulumParams, PendulumState};
pub use dynamics::{kinetic_energy, potential_energy, total_energy};
pub use error::{Result, SimError};
pub use sim::{Playback, Simulation};
