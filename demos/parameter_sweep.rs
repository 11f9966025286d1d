use glam::DVec2;
use pendulum_lab::*;

fn main() -> Result<()> {
    let mut sim =
        Simulation::from_points(DVec2::ZERO, DVec2::new(3.0, -4.0), DVec2::new(3.0, -9.0))?;
    sim.toggle_playback();

    println!("row   mass2   gravity    theta1    theta2  steps");
    for row in 0..5u32 {
        sim.set_mass2(10.0 + 15.0 * f64::from(row))?;
        sim.set_gravity(-9.8 - 2.0 * f64::from(row))?;
        let steps = sim.advance(1.0)?;
        let state = sim.state();
        println!(
            "{row:>3}  {:>6.1}  {:>8.1}  {:>8.4}  {:>8.4}  {steps:>5}",
            state.mass2, state.gravity, state.theta1, state.theta2,
        );
    }

    // a whole parameter set can be staged and committed in one call
    let mut params = sim.state().params();
    params.radius1 = 2.5;
    params.gravity = -1.62;
    sim.apply_params(&params)?;
    println!(
        "lunar preset applied: radius1 = {}, gravity = {}",
        sim.state().radius1,
        sim.state().gravity,
    );

    // invalid sets are refused wholesale and change nothing
    let bad = PendulumParams {
        mass1: -1.0,
        ..PendulumParams::default()
    };
    match sim.apply_params(&bad) {
        Err(err) => println!("rejected: {err}"),
        Ok(()) => println!("negative mass was unexpectedly accepted"),
    }
    Ok(())
}
