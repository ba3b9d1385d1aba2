/*
 * Flocking Simulation - Headless Demo Runner
 *
 * This binary builds a default simulation, advances it at a fixed timestep
 * for a while, and periodically logs aggregate flock statistics. It stands
 * in for the rendering/physics host that would normally drive the core.
 */

use flocking::{FlockSimulation, ParamsError, SimulationParams};
use tracing::info;
use tracing_subscriber::EnvFilter;

const TICKS: u32 = 600;
const TICKS_PER_REPORT: u32 = 60;

fn main() -> Result<(), ParamsError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let params = SimulationParams::default();
    let mut sim = FlockSimulation::new(params)?;
    info!(num_boids = sim.len(), "starting flock simulation");

    let dt = 1.0 / 60.0;
    for tick in 1..=TICKS {
        sim.step(dt);

        if tick % TICKS_PER_REPORT == 0 {
            let (mean_speed, mean_altitude) = flock_stats(&sim);
            info!(tick, mean_speed, mean_altitude, "flock status");
        }
    }

    Ok(())
}

// Aggregate statistics over the whole flock
fn flock_stats(sim: &FlockSimulation) -> (f32, f32) {
    let count = sim.len() as f32;
    let mean_speed = sim
        .boids()
        .iter()
        .map(|boid| boid.velocity.length())
        .sum::<f32>()
        / count;
    let mean_altitude = sim.boids().iter().map(|boid| boid.position.y).sum::<f32>() / count;
    (mean_speed, mean_altitude)
}
