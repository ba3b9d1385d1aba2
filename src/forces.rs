/*
 * Forces Module
 *
 * This module computes the net steering force for one boid from its
 * candidate neighbor list. All three rules read the same start-of-tick
 * position/velocity snapshot and are accumulated in a single pass:
 * - Cohesion: steer towards the mean position of boids within attract_radius
 * - Alignment: steer towards the mean velocity of boids within align_radius
 * - Separation: steer away from every boid within repel_radius
 */

use glam::Vec3;

use crate::params::SimulationParams;

// Compute the net steering force for the boid at `index`. The candidate
// list comes straight from the spatial grid: unordered, unfiltered, and
// possibly containing `index` itself, which is excluded here before any
// rule is applied. Pure function, no side effects.
pub fn compute_force(
    index: usize,
    positions: &[Vec3],
    velocities: &[Vec3],
    candidates: &[usize],
    params: &SimulationParams,
) -> Vec3 {
    let position = positions[index];
    let velocity = velocities[index];

    let mut position_sum = Vec3::ZERO;
    let mut position_count = 0;
    let mut velocity_sum = Vec3::ZERO;
    let mut velocity_count = 0;
    let mut repulsion = Vec3::ZERO;

    // Process all candidates in a single pass
    for &other in candidates {
        // Never let the boid steer against itself
        if other == index {
            continue;
        }

        let separation = position - positions[other];
        let distance = separation.length();

        // Cohesion
        if distance < params.attract_radius {
            position_sum += positions[other];
            position_count += 1;
        }

        // Alignment
        if distance < params.align_radius {
            velocity_sum += velocities[other];
            velocity_count += 1;
        }

        // Separation; a coincident pair has no direction to push along, so
        // skip it rather than divide by zero
        if distance < params.repel_radius && distance > f32::EPSILON {
            repulsion += separation / distance;
        }
    }

    // Cohesion force component: seek the local center of mass
    let mut cohesion = Vec3::ZERO;
    if position_count > 0 {
        let mean_position = position_sum / position_count as f32;
        let desired = (mean_position - position).normalize_or_zero() * params.attract_vmax;
        cohesion = (desired - velocity) * params.attract_factor;
    }

    // Alignment force component: match the local mean velocity
    let mut alignment = Vec3::ZERO;
    if velocity_count > 0 {
        let mean_velocity = velocity_sum / velocity_count as f32;
        alignment = (mean_velocity - velocity) * params.align_factor;
    }

    // Separation force component: summed, not averaged
    let separation = repulsion * params.repel_factor;

    cohesion + alignment + separation
}
