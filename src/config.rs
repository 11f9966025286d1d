//! Global configuration constants for the Pendulum Lab core.

/// Default gravitational acceleration along the +Y mapping axis
/// (negative = pulls toward -Y).
pub const DEFAULT_GRAVITY: f64 = -9.8;

/// Default integration timestep (in seconds), matching a 60 Hz update gate.
pub const DEFAULT_TIME_STEP: f64 = 1.0 / 60.0;

/// Default mass of each bob.
pub const DEFAULT_MASS: f64 = 10.0;

/// Default length of each rod.
pub const DEFAULT_ROD_LENGTH: f64 = 5.0;

/// Upper bound on how many catch-up steps a single `advance` call may run.
/// Keeps a long stall from turning into an unbounded stepping burst.
pub const MAX_STEPS_PER_ADVANCE: u32 = 240;
