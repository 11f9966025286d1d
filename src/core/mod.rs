//! Core types describing the pendulum's configuration and dynamic state.

pub mod params;
pub mod state;

pub use params::PendulumParams;
pub use state::PendulumState;
