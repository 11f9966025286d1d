use glam::DVec2;
use pendulum_lab::*;

fn main() -> Result<()> {
    let mut sim =
        Simulation::from_points(DVec2::ZERO, DVec2::new(0.0, 5.0), DVec2::new(0.0, 10.0))?;

    // the stacked configuration balances exactly inverted; a small nudge
    // tips it into the chaotic regime
    sim.state_mut().theta1 += 0.01;
    sim.toggle_playback();

    println!("tick     time    theta1    theta2    bob2.x    bob2.y     energy");
    for tick in 0..600u32 {
        sim.advance(1.0 / 60.0)?;
        if tick % 30 == 29 {
            let state = sim.state();
            let (_, bob2) = sim.bob_positions();
            println!(
                "{tick:>4}  {:>7.3}  {:>8.4}  {:>8.4}  {:>8.3}  {:>8.3}  {:>9.3}",
                sim.time(),
                state.theta1,
                state.theta2,
                bob2.x,
                bob2.y,
                total_energy(state),
            );
        }
    }

    sim.reset()?;
    println!(
        "after reset: playback = {:?}, omega1 = {}, omega2 = {}, time = {}",
        sim.playback(),
        sim.state().omega1,
        sim.state().omega2,
        sim.time(),
    );
    Ok(())
}
