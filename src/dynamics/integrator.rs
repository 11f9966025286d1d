//! One explicit step of the classical double-pendulum equations of motion.

use crate::core::params::check_finite;
use crate::core::PendulumState;
use crate::error::{Result, SimError};

/// Angular accelerations of both rods under the current state.
///
/// Pure function, mutates nothing. The shared denominator
/// `mu - cos^2(theta1 - theta2)` with `mu = 1 + mass1/mass2` is strictly
/// positive whenever both masses hold validated (positive) values; the
/// result goes non-finite only for states injected past validation, which
/// [`step`] catches.
pub fn angular_accelerations(state: &PendulumState) -> (f64, f64) {
    let PendulumState {
        radius1: r1,
        radius2: r2,
        mass1: m1,
        mass2: m2,
        theta1,
        theta2,
        omega1,
        omega2,
        gravity: g,
        ..
    } = *state;

    let mu = 1.0 + m1 / m2;
    let delta = theta1 - theta2;
    let (sin_delta, cos_delta) = delta.sin_cos();
    let denom = mu - cos_delta * cos_delta;

    let alpha1 = (g * (theta2.sin() * cos_delta - mu * theta1.sin())
        - (r2 * omega2 * omega2 + r1 * omega1 * omega1 * cos_delta) * sin_delta)
        / (r1 * denom);
    let alpha2 = (mu * g * (theta1.sin() * cos_delta - theta2.sin())
        + (mu * r1 * omega1 * omega1 + r2 * omega2 * omega2 * cos_delta) * sin_delta)
        / (r2 * denom);

    (alpha1, alpha2)
}

/// Advances the state in place by one semi-implicit Euler step of duration
/// `dt`: velocities absorb the current accelerations first, and the updated
/// velocities then advance the angles.
///
/// If either acceleration or any updated state variable comes out
/// non-finite, nothing is committed and the call returns
/// [`SimError::NumericInstability`] with the pre-step angles. Any finite
/// `dt` is accepted; zero is a legal no-op and negative values run the
/// dynamics backwards.
pub fn step(state: &mut PendulumState, dt: f64) -> Result<()> {
    check_finite("dt", dt)?;

    let (alpha1, alpha2) = angular_accelerations(state);
    let omega1 = state.omega1 + alpha1 * dt;
    let omega2 = state.omega2 + alpha2 * dt;
    let theta1 = state.theta1 + omega1 * dt;
    let theta2 = state.theta2 + omega2 * dt;

    let finite = alpha1.is_finite()
        && alpha2.is_finite()
        && omega1.is_finite()
        && omega2.is_finite()
        && theta1.is_finite()
        && theta2.is_finite();
    if !finite {
        return Err(SimError::NumericInstability {
            theta1: state.theta1,
            theta2: state.theta2,
        });
    }

    state.omega1 = omega1;
    state.omega2 = omega2;
    state.theta1 = theta1;
    state.theta2 = theta2;
    Ok(())
}
