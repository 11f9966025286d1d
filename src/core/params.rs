use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_GRAVITY, DEFAULT_MASS, DEFAULT_ROD_LENGTH};
use crate::error::{Result, SimError};

/// Live-tunable physical parameters of the double pendulum.
///
/// A control surface stages edits here and commits them in one validated
/// operation; nothing reaches the state until `validate` passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumParams {
    pub mass1: f64,
    pub mass2: f64,
    pub radius1: f64,
    pub radius2: f64,
    pub gravity: f64,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            mass1: DEFAULT_MASS,
            mass2: DEFAULT_MASS,
            radius1: DEFAULT_ROD_LENGTH,
            radius2: DEFAULT_ROD_LENGTH,
            gravity: DEFAULT_GRAVITY,
        }
    }
}

impl PendulumParams {
    /// Checks every field against the ranges the equations of motion can
    /// handle. Masses and radii must be positive and finite; gravity only
    /// finite (zero and positive values are legal).
    pub fn validate(&self) -> Result<()> {
        check_positive("mass1", self.mass1)?;
        check_positive("mass2", self.mass2)?;
        check_positive("radius1", self.radius1)?;
        check_positive("radius2", self.radius2)?;
        check_finite("gravity", self.gravity)?;
        Ok(())
    }
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimError::InvalidParameter { name, value });
    }
    Ok(())
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SimError::InvalidParameter { name, value });
    }
    Ok(())
}
