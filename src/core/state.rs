use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::params::{check_positive, PendulumParams};
use crate::config::{DEFAULT_GRAVITY, DEFAULT_MASS, DEFAULT_ROD_LENGTH};
use crate::error::Result;
use crate::utils::math::{polar_angle, polar_offset};

/// Full geometric and dynamic state of a planar double pendulum.
///
/// Angles are measured from the +Y axis of the simulation plane, increasing
/// toward +X, so a bob straight "above" its pivot sits at angle 0 and
/// `gravity` is the signed acceleration along +Y. The pair
/// (theta1, omega1, theta2, omega2) together with the fixed radii, masses,
/// and gravity fully determines the mechanical configuration.
///
/// Fields are public for direct inspection and scripting; the validated
/// mutation paths are [`configure`](Self::configure) and
/// [`apply_params`](Self::apply_params).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumState {
    /// Fixed anchor of the first rod. Never mutated by the integrator.
    pub pivot: DVec2,
    /// Length of rod 1 (pivot to bob 1).
    pub radius1: f64,
    /// Length of rod 2 (bob 1 to bob 2).
    pub radius2: f64,
    pub mass1: f64,
    pub mass2: f64,
    /// Angle of rod 1 (radians). Primary integrated variable.
    pub theta1: f64,
    /// Angle of rod 2 (radians), about bob 1 but against the same axis.
    pub theta2: f64,
    pub omega1: f64,
    pub omega2: f64,
    pub gravity: f64,
}

impl Default for PendulumState {
    fn default() -> Self {
        Self {
            pivot: DVec2::ZERO,
            radius1: DEFAULT_ROD_LENGTH,
            radius2: DEFAULT_ROD_LENGTH,
            mass1: DEFAULT_MASS,
            mass2: DEFAULT_MASS,
            theta1: 0.0,
            theta2: 0.0,
            omega1: 0.0,
            omega2: 0.0,
            gravity: DEFAULT_GRAVITY,
        }
    }
}

impl PendulumState {
    /// Builds a state from three Cartesian points, with default masses and
    /// gravity and zero velocity.
    pub fn from_points(pivot: DVec2, bob1: DVec2, bob2: DVec2) -> Result<Self> {
        let mut state = Self::default();
        state.configure(pivot, bob1, bob2)?;
        Ok(state)
    }

    /// Derives pivot, radii, and angles from three Cartesian points.
    ///
    /// Overwrites only the geometric fields; velocities, masses, and
    /// gravity are untouched. A zero-length rod or any non-finite input is
    /// rejected before anything is written.
    pub fn configure(&mut self, pivot: DVec2, bob1: DVec2, bob2: DVec2) -> Result<()> {
        let rod1 = bob1 - pivot;
        let rod2 = bob2 - bob1;
        let radius1 = rod1.length();
        let radius2 = rod2.length();
        check_positive("radius1", radius1)?;
        check_positive("radius2", radius2)?;

        self.pivot = pivot;
        self.radius1 = radius1;
        self.radius2 = radius2;
        self.theta1 = polar_angle(rod1);
        self.theta2 = polar_angle(rod2);
        log::debug!(
            "configured pendulum: radius1 = {radius1:.4}, radius2 = {radius2:.4}, \
             theta1 = {:.4}, theta2 = {:.4}",
            self.theta1,
            self.theta2
        );
        Ok(())
    }

    /// Commits a validated set of tunable parameters.
    pub fn apply_params(&mut self, params: &PendulumParams) -> Result<()> {
        params.validate()?;
        self.mass1 = params.mass1;
        self.mass2 = params.mass2;
        self.radius1 = params.radius1;
        self.radius2 = params.radius2;
        self.gravity = params.gravity;
        Ok(())
    }

    /// Current tunable parameters as one value.
    pub fn params(&self) -> PendulumParams {
        PendulumParams {
            mass1: self.mass1,
            mass2: self.mass2,
            radius1: self.radius1,
            radius2: self.radius2,
            gravity: self.gravity,
        }
    }

    /// Both bob positions relative to the pivot.
    pub fn bob_offsets(&self) -> (DVec2, DVec2) {
        let bob1 = polar_offset(self.radius1, self.theta1);
        let bob2 = bob1 + polar_offset(self.radius2, self.theta2);
        (bob1, bob2)
    }

    /// Both bob positions in world space (pivot added).
    pub fn bob_positions(&self) -> (DVec2, DVec2) {
        let (bob1, bob2) = self.bob_offsets();
        (self.pivot + bob1, self.pivot + bob2)
    }

    /// Zeroes both angular velocities. Angles and geometry keep their last
    /// configured values.
    pub fn reset(&mut self) {
        self.omega1 = 0.0;
        self.omega2 = 0.0;
    }
}
