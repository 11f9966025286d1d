//! The simulation driver: playback state machine, fixed-rate step gate,
//! clock, and the reset command.

use std::time::Instant;

use glam::DVec2;

use crate::config::{DEFAULT_ROD_LENGTH, DEFAULT_TIME_STEP, MAX_STEPS_PER_ADVANCE};
use crate::core::params::{check_finite, check_positive};
use crate::core::{PendulumParams, PendulumState};
use crate::dynamics::integrator;
use crate::error::{Result, SimError};
use crate::utils::logging::{warn_if_step_budget_exceeded, ScopedTimer};

/// Playback mode of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    /// Elapsed time is discarded; [`Simulation::advance`] runs no steps.
    #[default]
    Paused,
    /// Elapsed time is converted into fixed-rate integration steps.
    Running,
}

/// Owns a [`PendulumState`] and drives it the way an interactive frame loop
/// expects: play/pause, a fixed-rate step gate, a simulated-time clock, and
/// a reset command that restores the last explicit configuration.
///
/// Strictly single-owner: steps never overlap and every mutation happens
/// inside a method call on the owning thread.
pub struct Simulation {
    state: PendulumState,
    configured_points: [DVec2; 3],
    playback: Playback,
    time_step: f64,
    accumulator: f64,
    clock: f64,
    steps_taken: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_STEP)
    }
}

impl Simulation {
    /// Creates a paused simulation stepping at the given fixed timestep.
    /// Non-positive or non-finite values fall back to the default rate.
    pub fn new(time_step: f64) -> Self {
        let ts = if time_step.is_finite() && time_step > 0.0 {
            time_step
        } else {
            DEFAULT_TIME_STEP
        };

        Self {
            state: PendulumState::default(),
            configured_points: [
                DVec2::ZERO,
                DVec2::new(0.0, DEFAULT_ROD_LENGTH),
                DVec2::new(0.0, 2.0 * DEFAULT_ROD_LENGTH),
            ],
            playback: Playback::Paused,
            time_step: ts,
            accumulator: 0.0,
            clock: 0.0,
            steps_taken: 0,
        }
    }

    /// Creates a paused simulation at the default rate, configured from
    /// three Cartesian points.
    pub fn from_points(pivot: DVec2, bob1: DVec2, bob2: DVec2) -> Result<Self> {
        let mut sim = Self::default();
        sim.configure(pivot, bob1, bob2)?;
        Ok(sim)
    }

    /// Applies a three-point configuration and records it as the target of
    /// [`reset`](Self::reset). Velocities, masses, and gravity are
    /// untouched.
    pub fn configure(&mut self, pivot: DVec2, bob1: DVec2, bob2: DVec2) -> Result<()> {
        self.state.configure(pivot, bob1, bob2)?;
        self.configured_points = [pivot, bob1, bob2];
        Ok(())
    }

    /// Flips between [`Playback::Paused`] and [`Playback::Running`],
    /// returning the new mode.
    pub fn toggle_playback(&mut self) -> Playback {
        self.playback = match self.playback {
            Playback::Paused => Playback::Running,
            Playback::Running => Playback::Paused,
        };
        self.playback
    }

    /// Feeds elapsed wall time into the fixed-rate gate and runs every full
    /// timestep it covers, returning the number of committed steps.
    ///
    /// While paused nothing accumulates and no steps run. A backlog worth
    /// more than [`MAX_STEPS_PER_ADVANCE`] steps is dropped once that many
    /// have run, so one long stall cannot stall the next frame in turn. On
    /// [`SimError::NumericInstability`] the driver pauses itself and
    /// propagates the error; the failed step is not committed.
    pub fn advance(&mut self, elapsed: f64) -> Result<u32> {
        if !elapsed.is_finite() || elapsed < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "elapsed",
                value: elapsed,
            });
        }
        if self.playback == Playback::Paused {
            return Ok(0);
        }

        let _timer = ScopedTimer::new("simulation::advance");
        let started = Instant::now();

        self.accumulator += elapsed;
        let mut steps = 0u32;
        while self.accumulator >= self.time_step && steps < MAX_STEPS_PER_ADVANCE {
            self.run_step(self.time_step)?;
            self.accumulator -= self.time_step;
            steps += 1;
        }

        if self.accumulator >= self.time_step {
            log::warn!(
                "dropping {:.3} s of step backlog after {steps} catch-up steps",
                self.accumulator
            );
            self.accumulator = 0.0;
        }

        warn_if_step_budget_exceeded(started.elapsed(), f64::from(steps) * self.time_step);
        Ok(steps)
    }

    /// Runs one integration step of arbitrary duration, bypassing both the
    /// playback gate and the accumulator. The clock advances with the step.
    pub fn step_once(&mut self, dt: f64) -> Result<()> {
        self.run_step(dt)
    }

    /// The full reset command: re-applies the recorded configuration
    /// points, zeroes both angular velocities, pauses playback, and zeroes
    /// the clock and the step gate. Masses and gravity keep their current
    /// values.
    ///
    /// Never fails for points recorded by a successful
    /// [`configure`](Self::configure).
    pub fn reset(&mut self) -> Result<()> {
        let [pivot, bob1, bob2] = self.configured_points;
        self.state.configure(pivot, bob1, bob2)?;
        self.state.reset();
        self.playback = Playback::Paused;
        self.accumulator = 0.0;
        self.clock = 0.0;
        self.steps_taken = 0;
        Ok(())
    }

    fn run_step(&mut self, dt: f64) -> Result<()> {
        if let Err(err) = integrator::step(&mut self.state, dt) {
            self.playback = Playback::Paused;
            log::warn!("pausing after unstable step at t = {:.4}: {err}", self.clock);
            return Err(err);
        }
        self.clock += dt;
        self.steps_taken += 1;
        Ok(())
    }

    /// Live-tunes the first bob's mass. Takes effect on the next step.
    pub fn set_mass1(&mut self, mass: f64) -> Result<()> {
        check_positive("mass1", mass)?;
        self.state.mass1 = mass;
        Ok(())
    }

    /// Live-tunes the second bob's mass.
    pub fn set_mass2(&mut self, mass: f64) -> Result<()> {
        check_positive("mass2", mass)?;
        self.state.mass2 = mass;
        Ok(())
    }

    /// Live-tunes the first rod's length.
    pub fn set_radius1(&mut self, radius: f64) -> Result<()> {
        check_positive("radius1", radius)?;
        self.state.radius1 = radius;
        Ok(())
    }

    /// Live-tunes the second rod's length.
    pub fn set_radius2(&mut self, radius: f64) -> Result<()> {
        check_positive("radius2", radius)?;
        self.state.radius2 = radius;
        Ok(())
    }

    /// Live-tunes the gravitational acceleration. Any finite value is
    /// legal, including zero and upward (positive) pulls.
    pub fn set_gravity(&mut self, gravity: f64) -> Result<()> {
        check_finite("gravity", gravity)?;
        self.state.gravity = gravity;
        Ok(())
    }

    /// Commits a whole staged parameter set in one validated operation.
    pub fn apply_params(&mut self, params: &PendulumParams) -> Result<()> {
        self.state.apply_params(params)
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    /// Mutable access to the raw state. Writes bypass validation; values
    /// the equations cannot handle surface as
    /// [`SimError::NumericInstability`] on the next step.
    pub fn state_mut(&mut self) -> &mut PendulumState {
        &mut self.state
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_running(&self) -> bool {
        self.playback == Playback::Running
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Total simulated time advanced by committed steps.
    pub fn time(&self) -> f64 {
        self.clock
    }

    /// Committed steps since creation or the last reset.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn bob_positions(&self) -> (DVec2, DVec2) {
        self.state.bob_positions()
    }

    pub fn bob_offsets(&self) -> (DVec2, DVec2) {
        self.state.bob_offsets()
    }
}
