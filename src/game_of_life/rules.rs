//! Conway's Game of Life rules (B3/S23)

use super::Grid;
use itertools::iproduct;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Whether a cell is alive in the next generation given its current
    /// state and live-neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }

    /// Compute the next generation's cells, row-major, from a read-only view
    /// of the current grid
    pub fn next_generation(current: &Grid) -> Vec<bool> {
        iproduct!(0..current.height(), 0..current.width())
            .map(|(row, col)| {
                Self::should_be_alive(current.cell(row, col), current.count_neighbors(row, col))
            })
            .collect()
    }

    /// Return the successor of a grid, leaving the input untouched
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();
        next.step();
        next
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid.step();
        }
        grid
    }
}
