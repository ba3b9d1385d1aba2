/*
 * Simulation Module
 *
 * This module defines FlockSimulation, the orchestrator that advances a
 * fixed population of boids by one tick. The tick has five phases in
 * strict order with simultaneous-update semantics: build the spatial grid,
 * query each boid's neighborhood, compute each boid's steering force from
 * the start-of-tick snapshot, integrate and clamp each boid, clear the grid.
 *
 * The grid is owned by the simulation instance, so independent simulations
 * never share state. The force and integration phases are independent per
 * boid and run on rayon when enabled; forces are collected in index order
 * first, so the parallel path is bit-identical to the sequential one.
 */

use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::boid::Boid;
use crate::forces::compute_force;
use crate::params::{ParamsError, SimulationParams};
use crate::spatial_grid::SpatialGrid;

pub struct FlockSimulation {
    boids: Vec<Boid>,
    spatial_grid: SpatialGrid,
    params: SimulationParams,
}

impl FlockSimulation {
    // Create a simulation with a randomized population
    pub fn new(params: SimulationParams) -> Result<Self, ParamsError> {
        Self::from_rng(params, &mut rand::thread_rng())
    }

    // Create a simulation with a reproducible population
    pub fn with_seed(params: SimulationParams, seed: u64) -> Result<Self, ParamsError> {
        Self::from_rng(params, &mut StdRng::seed_from_u64(seed))
    }

    // Create a simulation from caller-supplied kinematic state; the
    // population size becomes the length of the supplied list
    pub fn from_boids(
        mut params: SimulationParams,
        boids: Vec<Boid>,
    ) -> Result<Self, ParamsError> {
        params.num_boids = boids.len();
        params.validate()?;
        let spatial_grid =
            SpatialGrid::new(params.cell_size, params.grid_dim, params.world_offset);
        debug!(num_boids = params.num_boids, "flock initialized from host state");
        Ok(Self {
            boids,
            spatial_grid,
            params,
        })
    }

    fn from_rng<R: Rng>(params: SimulationParams, rng: &mut R) -> Result<Self, ParamsError> {
        params.validate()?;
        let boids = (0..params.num_boids)
            .map(|_| Boid::spawn(rng, &params))
            .collect();
        let spatial_grid =
            SpatialGrid::new(params.cell_size, params.grid_dim, params.world_offset);
        debug!(num_boids = params.num_boids, "flock initialized");
        Ok(Self {
            boids,
            spatial_grid,
            params,
        })
    }

    // Advance the whole flock by one tick of elapsed time dt (seconds).
    // Atomic from the host's perspective: on return every boid has been
    // updated exactly once.
    pub fn step(&mut self, dt: f32) {
        trace!(dt, "advancing flock");

        // Phase 1: insert every boid's current position into the grid.
        // Boids outside the grid envelope are culled for this tick.
        for (index, boid) in self.boids.iter().enumerate() {
            self.spatial_grid.insert(index, boid.position);
        }

        // Start-of-tick snapshot; every neighborhood query and force
        // computation this tick reads these, so no boid's update can leak
        // into another boid's computation
        let positions: Vec<Vec3> = self.boids.iter().map(|boid| boid.position).collect();
        let velocities: Vec<Vec3> = self.boids.iter().map(|boid| boid.velocity).collect();

        let grid = &self.spatial_grid;
        let params = &self.params;
        let force_for = |index: usize| {
            // Phase 2: gather the candidate list from the just-built grid
            let candidates = grid.neighborhood(positions[index]);
            // Phase 3: net steering force over the snapshot
            compute_force(index, &positions, &velocities, &candidates, params)
        };

        // Collected in index order regardless of scheduling
        let forces: Vec<Vec3> = if self.params.enable_parallel {
            (0..self.boids.len())
                .into_par_iter()
                .map(force_for)
                .collect()
        } else {
            (0..self.boids.len()).map(force_for).collect()
        };

        // Phase 4: integrate and clamp, each boid writing only its own state
        if self.params.enable_parallel {
            self.boids
                .par_iter_mut()
                .zip(forces.par_iter())
                .for_each(|(boid, &force)| {
                    boid.apply_force(force);
                    boid.integrate(dt, params);
                });
        } else {
            for (boid, &force) in self.boids.iter_mut().zip(forces.iter()) {
                boid.apply_force(force);
                boid.integrate(dt, params);
            }
        }

        // Phase 5: the grid never outlives the tick that built it
        self.spatial_grid.clear();
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn position(&self, index: usize) -> Vec3 {
        self.boids[index].position
    }

    pub fn velocity(&self, index: usize) -> Vec3 {
        self.boids[index].velocity
    }

    pub fn orientation(&self, index: usize) -> Quat {
        self.boids[index].orientation()
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }
}
