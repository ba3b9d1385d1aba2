/*
 * Flocking Simulation Core - Module Definitions
 *
 * This file defines the module structure for the flocking simulation library.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use params::{ParamsError, SimulationParams};
pub use simulation::FlockSimulation;
pub use spatial_grid::SpatialGrid;

// Define modules
pub mod boid;
pub mod forces;
pub mod params;
pub mod simulation;
pub mod spatial_grid;
