/*
 * Spatial Grid Module
 *
 * This module defines the SpatialGrid struct for efficient neighbor lookups.
 * It divides the planar region of the world into a fixed grid of cells,
 * allowing for near-constant-time neighbor queries instead of O(n) linear
 * searches.
 *
 * The grid covers x/z in [-world_offset, -world_offset + grid_dim * cell_size);
 * positions mapping outside that envelope are culled for the tick rather
 * than treated as an error. The grid is transient: populated at tick start,
 * read during neighbor queries, and fully cleared at tick end.
 */

use glam::Vec3;

pub struct SpatialGrid {
    pub cell_size: f32,
    pub grid_dim: usize,
    pub world_offset: f32,
    grid: Vec<Vec<usize>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32, grid_dim: usize, world_offset: f32) -> Self {
        // Initialize an empty grid, one growable bucket per cell
        let grid = vec![Vec::new(); grid_dim * grid_dim];

        Self {
            cell_size,
            grid_dim,
            world_offset,
            grid,
        }
    }

    // Convert a world position to cell coordinates on the x/z plane.
    // Returns None when the position maps outside the grid envelope.
    #[inline]
    pub fn cell_coords(&self, position: Vec3) -> Option<(usize, usize)> {
        let cell_x = ((position.x + self.world_offset) / self.cell_size).floor() as isize;
        let cell_z = ((position.z + self.world_offset) / self.cell_size).floor() as isize;

        let dim = self.grid_dim as isize;
        if cell_x < 0 || cell_x >= dim || cell_z < 0 || cell_z >= dim {
            return None;
        }

        Some((cell_x as usize, cell_z as usize))
    }

    // Insert a boid index into the cell containing the given position.
    // Boids outside the envelope are silently omitted for this tick: they
    // see no neighbors and are invisible to every other boid.
    #[inline]
    pub fn insert(&mut self, boid_index: usize, position: Vec3) {
        if let Some((cell_x, cell_z)) = self.cell_coords(position) {
            self.grid[cell_z * self.grid_dim + cell_x].push(boid_index);
        }
    }

    // Get boid indices within and adjacent to the cell containing the given
    // position (3x3 block, each cell individually bounds-checked, no
    // wraparound at the grid edges). The result is unordered, not
    // de-duplicated, and may include the querying boid's own index.
    pub fn neighborhood(&self, position: Vec3) -> Vec<usize> {
        let Some((cell_x, cell_z)) = self.cell_coords(position) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let dim = self.grid_dim as isize;

        for z_offset in -1..=1 {
            let check_z = cell_z as isize + z_offset;

            // Skip if z is outside the grid
            if check_z < 0 || check_z >= dim {
                continue;
            }

            let row_index = check_z as usize * self.grid_dim;

            for x_offset in -1..=1 {
                let check_x = cell_x as isize + x_offset;

                // Skip if x is outside the grid
                if check_x < 0 || check_x >= dim {
                    continue;
                }

                // Add all boids in this cell to the result
                result.extend_from_slice(&self.grid[row_index + check_x as usize]);
            }
        }

        result
    }

    // Clear the grid; must complete before the next tick's inserts begin
    pub fn clear(&mut self) {
        for cell in &mut self.grid {
            cell.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    fn grid() -> SpatialGrid {
        SpatialGrid::new(10.0, 20, 100.0)
    }

    #[test]
    fn maps_world_position_to_expected_cell() {
        let grid = grid();
        assert_eq!(grid.cell_coords(vec3(-100.0, 20.0, -100.0)), Some((0, 0)));
        assert_eq!(grid.cell_coords(vec3(0.0, 20.0, 0.0)), Some((10, 10)));
        assert_eq!(grid.cell_coords(vec3(99.9, 20.0, 99.9)), Some((19, 19)));
    }

    #[test]
    fn positions_outside_envelope_are_culled() {
        let grid = grid();
        assert_eq!(grid.cell_coords(vec3(100.0, 20.0, 0.0)), None);
        assert_eq!(grid.cell_coords(vec3(-100.1, 20.0, 0.0)), None);
        assert_eq!(grid.cell_coords(vec3(500.0, 20.0, 500.0)), None);
    }

    #[test]
    fn altitude_does_not_affect_cell_mapping() {
        let grid = grid();
        assert_eq!(
            grid.cell_coords(vec3(5.0, 10.0, 5.0)),
            grid.cell_coords(vec3(5.0, 50.0, 5.0))
        );
    }

    #[test]
    fn insert_outside_envelope_is_silently_dropped() {
        let mut grid = grid();
        grid.insert(0, vec3(500.0, 20.0, 500.0));
        for x in (-100..100).step_by(10) {
            for z in (-100..100).step_by(10) {
                assert!(grid.neighborhood(vec3(x as f32, 20.0, z as f32)).is_empty());
            }
        }
    }

    #[test]
    fn neighborhood_gathers_adjacent_cells() {
        let mut grid = grid();
        grid.insert(0, vec3(0.0, 20.0, 0.0)); // cell (10, 10)
        grid.insert(1, vec3(11.0, 20.0, 0.0)); // cell (11, 10), adjacent
        grid.insert(2, vec3(-11.0, 20.0, -11.0)); // cell (8, 8), two cells away diagonally
        grid.insert(3, vec3(25.0, 20.0, 0.0)); // cell (12, 10), two cells away

        let mut nearby = grid.neighborhood(vec3(0.0, 20.0, 0.0));
        nearby.sort_unstable();
        assert_eq!(nearby, vec![0, 1]);
    }

    #[test]
    fn neighborhood_includes_own_index() {
        let mut grid = grid();
        grid.insert(7, vec3(3.0, 20.0, 3.0));
        assert_eq!(grid.neighborhood(vec3(3.0, 20.0, 3.0)), vec![7]);
    }

    #[test]
    fn no_wraparound_at_grid_edges() {
        let mut grid = grid();
        // Opposite corners of the envelope must never see each other
        grid.insert(0, vec3(-99.0, 20.0, -99.0)); // cell (0, 0)
        grid.insert(1, vec3(99.0, 20.0, 99.0)); // cell (19, 19)

        assert_eq!(grid.neighborhood(vec3(-99.0, 20.0, -99.0)), vec![0]);
        assert_eq!(grid.neighborhood(vec3(99.0, 20.0, 99.0)), vec![1]);
    }

    #[test]
    fn query_from_outside_envelope_returns_nothing() {
        let mut grid = grid();
        grid.insert(0, vec3(0.0, 20.0, 0.0));
        assert!(grid.neighborhood(vec3(500.0, 20.0, 500.0)).is_empty());
    }

    #[test]
    fn clear_empties_every_bucket() {
        let mut grid = grid();
        grid.insert(0, vec3(0.0, 20.0, 0.0));
        grid.insert(1, vec3(-95.0, 20.0, 95.0));
        grid.clear();
        assert!(grid.neighborhood(vec3(0.0, 20.0, 0.0)).is_empty());
        assert!(grid.neighborhood(vec3(-95.0, 20.0, 95.0)).is_empty());
    }
}
