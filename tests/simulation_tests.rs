use std::f64::consts::PI;

use glam::DVec2;
use pendulum_lab::{dynamics::integrator, PendulumState, Playback, SimError, Simulation};

#[test]
fn stacked_equilibrium_is_a_fixed_point() {
    // both bobs stacked along the configuration axis map to angle 0;
    // sin(0) = 0 kills every force term, so nothing may ever move
    let mut sim =
        Simulation::from_points(DVec2::ZERO, DVec2::new(0.0, 5.0), DVec2::new(0.0, 10.0)).unwrap();
    sim.toggle_playback();

    for _ in 0..600 {
        sim.advance(sim.time_step()).unwrap();
    }

    let state = sim.state();
    assert_eq!(state.theta1, 0.0);
    assert_eq!(state.theta2, 0.0);
    assert_eq!(state.omega1, 0.0);
    assert_eq!(state.omega2, 0.0);
}

#[test]
fn zero_gravity_leaves_angles_frozen() {
    let mut sim =
        Simulation::from_points(DVec2::ZERO, DVec2::new(2.0, 3.0), DVec2::new(5.0, 1.0)).unwrap();
    sim.set_gravity(0.0).unwrap();
    let theta1 = sim.state().theta1;
    let theta2 = sim.state().theta2;

    for dt in [1.0 / 60.0, 1.0 / 144.0, 0.25, 0.0] {
        for _ in 0..200 {
            sim.step_once(dt).unwrap();
        }
    }

    assert_eq!(sim.state().theta1, theta1);
    assert_eq!(sim.state().theta2, theta2);
    assert_eq!(sim.state().omega1, 0.0);
    assert_eq!(sim.state().omega2, 0.0);
}

#[test]
fn from_points_round_trips_world_positions() {
    let triples = [
        (DVec2::ZERO, DVec2::new(0.0, 5.0), DVec2::new(0.0, 10.0)),
        (
            DVec2::new(1.0, 2.0),
            DVec2::new(-3.0, 4.5),
            DVec2::new(2.25, -8.0),
        ),
        (
            DVec2::new(-10.0, 0.5),
            DVec2::new(-10.0, -4.5),
            DVec2::new(-6.0, -4.5),
        ),
        (
            DVec2::new(0.0, 100.0),
            DVec2::new(0.001, 100.0),
            DVec2::new(0.001, 99.0),
        ),
    ];

    for (pivot, bob1, bob2) in triples {
        let sim = Simulation::from_points(pivot, bob1, bob2).unwrap();
        let (out1, out2) = sim.bob_positions();
        assert!(out1.abs_diff_eq(bob1, 1e-9), "bob1: {out1} vs {bob1}");
        assert!(out2.abs_diff_eq(bob2, 1e-9), "bob2: {out2} vs {bob2}");
    }
}

#[test]
fn reset_is_idempotent_on_velocities() {
    let mut sim =
        Simulation::from_points(DVec2::ZERO, DVec2::new(3.0, 4.0), DVec2::new(6.0, 8.0)).unwrap();
    sim.toggle_playback();
    for _ in 0..120 {
        sim.advance(1.0 / 60.0).unwrap();
    }
    assert!(
        sim.state().omega1 != 0.0 || sim.state().omega2 != 0.0,
        "pendulum should be moving before the reset"
    );

    sim.reset().unwrap();
    assert_eq!(sim.state().omega1, 0.0);
    assert_eq!(sim.state().omega2, 0.0);

    // a second reset is a no-op on velocities
    sim.reset().unwrap();
    assert_eq!(sim.state().omega1, 0.0);
    assert_eq!(sim.state().omega2, 0.0);
}

#[test]
fn identical_runs_stay_bit_identical() {
    let dts = [1.0 / 60.0, 1.0 / 90.0, 1.0 / 60.0, 1.0 / 240.0];
    let make = || {
        Simulation::from_points(DVec2::ZERO, DVec2::new(1.5, 4.0), DVec2::new(4.0, 6.5)).unwrap()
    };

    let mut a = make();
    let mut b = make();
    for round in 0..500 {
        let dt = dts[round % dts.len()];
        a.step_once(dt).unwrap();
        b.step_once(dt).unwrap();
    }

    assert_eq!(a.state().theta1.to_bits(), b.state().theta1.to_bits());
    assert_eq!(a.state().theta2.to_bits(), b.state().theta2.to_bits());
    assert_eq!(a.state().omega1.to_bits(), b.state().omega1.to_bits());
    assert_eq!(a.state().omega2.to_bits(), b.state().omega2.to_bits());
}

#[test]
fn reference_scenario_from_three_stacked_points() {
    let mut sim =
        Simulation::from_points(DVec2::ZERO, DVec2::new(0.0, 5.0), DVec2::new(0.0, 10.0)).unwrap();
    let configured = *sim.state();
    assert!((configured.radius1 - 5.0).abs() < 1e-12);
    assert!((configured.radius2 - 5.0).abs() < 1e-12);
    assert!(configured.theta1.abs() < 1e-12);
    assert!(configured.theta2.abs() < 1e-12);

    // dt = 0 commits a step but moves nothing
    sim.step_once(0.0).unwrap();
    assert_eq!(*sim.state(), configured);

    // displaced a little from the hanging rest point, one small step swings
    // bob 1 back toward rest while bob 2 takes the opposite kick
    sim.state_mut().theta1 = PI + 0.2;
    sim.state_mut().theta2 = PI;
    sim.step_once(0.016).unwrap();

    let after = sim.state();
    assert!(
        after.omega1 < 0.0,
        "omega1 = {} should point back toward the rest angle",
        after.omega1
    );
    assert!(after.omega2 > 0.0, "omega2 = {}", after.omega2);
    assert!(
        after.omega1.abs() < 0.1 && after.omega2.abs() < 0.1,
        "one small step produces small velocities: omega1 = {}, omega2 = {}",
        after.omega1,
        after.omega2
    );
}

#[test]
fn degenerate_denominator_surfaces_instability() {
    let mut state = PendulumState::default();
    // equal angles and a zeroed first mass put the shared denominator at
    // exactly mu - cos^2(0) = 1 - 1 = 0
    state.mass1 = 0.0;
    state.theta1 = 0.3;
    state.theta2 = 0.3;
    let before = state;

    let err = integrator::step(&mut state, 1.0 / 60.0).unwrap_err();
    assert!(matches!(err, SimError::NumericInstability { .. }));
    assert_eq!(state, before, "failed step must leave the state untouched");
}

#[test]
fn playback_gates_every_step() {
    let mut sim =
        Simulation::from_points(DVec2::ZERO, DVec2::new(0.0, -5.0), DVec2::new(4.0, -8.0)).unwrap();
    let dt = sim.time_step();

    assert_eq!(sim.advance(10.0 * dt).unwrap(), 0, "paused must not step");
    assert_eq!(sim.time(), 0.0);

    sim.toggle_playback();
    for _ in 0..10 {
        assert_eq!(sim.advance(dt).unwrap(), 1);
    }
    assert!((sim.time() - 10.0 * dt).abs() < 1e-12);
    assert_eq!(sim.advance(10.5 * dt).unwrap(), 10);

    sim.toggle_playback();
    assert_eq!(sim.advance(10.0 * dt).unwrap(), 0);
}

#[test]
fn live_tunables_reject_invalid_values() {
    let mut sim = Simulation::default();
    let before = *sim.state();

    assert!(matches!(
        sim.set_mass1(0.0),
        Err(SimError::InvalidParameter { name: "mass1", .. })
    ));
    assert!(sim.set_mass2(-4.0).is_err());
    assert!(sim.set_radius1(f64::INFINITY).is_err());
    assert!(sim.set_radius2(-0.1).is_err());
    assert!(sim.set_gravity(f64::NAN).is_err());
    assert_eq!(*sim.state(), before, "rejected values must not commit");

    // zero gravity and any positive mass are legal
    sim.set_gravity(0.0).unwrap();
    sim.set_mass1(0.001).unwrap();
    assert_eq!(sim.state().gravity, 0.0);
    assert_eq!(sim.state().mass1, 0.001);
}

#[test]
fn driver_freezes_after_injected_corruption() {
    let mut sim =
        Simulation::from_points(DVec2::ZERO, DVec2::new(1.0, -4.0), DVec2::new(1.0, -9.0)).unwrap();
    sim.toggle_playback();
    sim.advance(0.5).unwrap();

    // direct field writes bypass validation on purpose; the next step is
    // where the damage is caught
    sim.state_mut().mass2 = 0.0;
    let err = sim.advance(0.5).unwrap_err();
    assert!(matches!(err, SimError::NumericInstability { .. }));
    assert_eq!(sim.playback(), Playback::Paused);

    // recovery path: fix the mass, resume, and the simulation steps again
    sim.set_mass2(10.0).unwrap();
    sim.toggle_playback();
    assert!(sim.advance(0.5).unwrap() > 0);
}
