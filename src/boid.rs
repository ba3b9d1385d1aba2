/*
 * Boid Module
 *
 * This module defines the Boid struct holding per-agent kinematic state.
 * Each boid follows three main rules, computed in the forces module:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 */

use glam::{Quat, Vec3};
use rand::Rng;

use crate::params::SimulationParams;

#[derive(Clone, Debug, PartialEq)]
pub struct Boid {
    pub position: Vec3,
    pub velocity: Vec3,
    // Net steering force for the current tick; recomputed every tick and
    // never persisted across ticks
    pub force: Vec3,
}

impl Boid {
    // Spawn a boid at a random position inside the configured volume with
    // a random horizontal velocity
    pub fn spawn<R: Rng>(rng: &mut R, params: &SimulationParams) -> Self {
        let x = rng.gen_range(-params.spawn_extent..params.spawn_extent);
        let z = rng.gen_range(-params.spawn_extent..params.spawn_extent);

        let vx = rng.gen_range(0.0..params.spawn_speed);
        let vz = rng.gen_range(0.0..params.spawn_speed);

        Self {
            position: Vec3::new(x, params.spawn_altitude, z),
            velocity: Vec3::new(vx, 0.0, vz),
            force: Vec3::ZERO,
        }
    }

    // Apply the net steering force for this tick
    pub fn apply_force(&mut self, force: Vec3) {
        self.force = force;
    }

    // Integrate the accumulated force into velocity and position over dt,
    // then clamp into the configured speed and altitude bounds. Unit mass
    // is assumed for every boid.
    pub fn integrate(&mut self, dt: f32, params: &SimulationParams) {
        // Update velocity
        self.velocity += self.force * dt;

        // Keep speed bounded: rescaling at the low end prevents stalling,
        // at the high end unbounded acceleration
        let speed = self.velocity.length();
        if speed > f32::EPSILON {
            if speed < params.min_speed {
                self.velocity *= params.min_speed / speed;
            } else if speed > params.max_speed {
                self.velocity *= params.max_speed / speed;
            }
        }

        // Update position
        self.position += self.velocity * dt;

        // Clamp altitude into the flight band
        self.position.y = self
            .position
            .y
            .clamp(params.min_altitude, params.max_altitude);

        // Reset the accumulator for the next tick
        self.force = Vec3::ZERO;
    }

    // Facing orientation derived from the velocity, for hosts that render.
    // Purely presentational; nothing in the simulation reads it back.
    pub fn orientation(&self) -> Quat {
        let heading = self.velocity.normalize_or_zero();
        if heading == Vec3::ZERO {
            return Quat::IDENTITY;
        }
        Quat::from_rotation_arc(Vec3::Z, heading)
    }
}
