/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * tunables for the flocking simulation. Parameters are set once at
 * construction, validated, and read-only for the rest of the run.
 */

use thiserror::Error;

/// Errors produced when a parameter set fails validation.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

// Immutable per-run tunables for the simulation
#[derive(Clone, Debug)]
pub struct SimulationParams {
    pub num_boids: usize,
    // Steering rule radii (world units)
    pub attract_radius: f32,
    pub repel_radius: f32,
    pub align_radius: f32,
    // Steering rule scaling
    pub attract_vmax: f32,
    pub attract_factor: f32,
    pub repel_factor: f32,
    pub align_factor: f32,
    // Spatial grid layout
    pub cell_size: f32,
    pub grid_dim: usize,
    pub world_offset: f32,
    // Kinematic bounds
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_altitude: f32,
    pub max_altitude: f32,
    // Spawn volume
    pub spawn_extent: f32,
    pub spawn_altitude: f32,
    pub spawn_speed: f32,
    // Performance settings
    pub enable_parallel: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 200,
            attract_radius: 30.0,
            repel_radius: 20.0,
            align_radius: 5.0,
            attract_vmax: 5.0,
            attract_factor: 4.0,
            repel_factor: 2.0,
            align_factor: 2.0,
            cell_size: 10.0,
            grid_dim: 20,
            world_offset: 100.0,
            min_speed: 10.0,
            max_speed: 50.0,
            min_altitude: 10.0,
            max_altitude: 50.0,
            spawn_extent: 90.0,
            spawn_altitude: 20.0,
            spawn_speed: 20.0,
            enable_parallel: true,
        }
    }
}

impl SimulationParams {
    // Validate the parameter set once at construction time. Runtime agent
    // state is always clamped into range instead of rejected, so this is
    // the only place configuration problems surface.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.num_boids == 0 {
            return Err(ParamsError::InvalidConfig("num_boids must be nonzero"));
        }
        if self.attract_radius <= 0.0 || self.repel_radius <= 0.0 || self.align_radius <= 0.0 {
            return Err(ParamsError::InvalidConfig("rule radii must be positive"));
        }
        if self.cell_size <= 0.0 {
            return Err(ParamsError::InvalidConfig("cell_size must be positive"));
        }
        if self.grid_dim == 0 {
            return Err(ParamsError::InvalidConfig("grid_dim must be nonzero"));
        }
        if self.min_speed < 0.0 || self.max_speed < self.min_speed {
            return Err(ParamsError::InvalidConfig(
                "speed bounds must satisfy 0 <= min_speed <= max_speed",
            ));
        }
        if self.max_altitude < self.min_altitude {
            return Err(ParamsError::InvalidConfig(
                "altitude bounds must satisfy min_altitude <= max_altitude",
            ));
        }
        if self.spawn_extent <= 0.0 || self.spawn_speed <= 0.0 {
            return Err(ParamsError::InvalidConfig(
                "spawn volume must have positive extent and speed",
            ));
        }
        Ok(())
    }
}
