//! Generation-counting driver around a grid

use super::io::grid_to_string;
use super::Grid;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A grid plus the number of generations it has been advanced
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: usize,
}

/// Serializable record of one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: usize,
    pub width: usize,
    pub height: usize,
    pub live_cells: usize,
    pub living: Vec<(usize, usize)>,
    /// One string per row, '1' alive and '0' dead
    pub rows: Vec<String>,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Advance one generation
    pub fn evolve(&mut self) {
        self.grid.step();
        self.generation += 1;
        trace!(
            generation = self.generation,
            live = self.grid.count_live_cells(),
            "advanced generation"
        );
    }

    pub fn evolve_n(&mut self, steps: usize) {
        for _ in 0..steps {
            self.evolve();
        }
    }

    /// Run `generations` steps, handing the simulation to `observer` before
    /// the first step and after every step
    pub fn simulate<F>(&mut self, generations: usize, mut observer: F)
    where
        F: FnMut(&Simulation),
    {
        for i in 0..=generations {
            observer(self);
            if i < generations {
                self.evolve();
            }
        }
    }

    pub fn is_extinct(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            width: self.grid.width(),
            height: self.grid.height(),
            live_cells: self.grid.count_live_cells(),
            living: self.grid.living_cells(),
            rows: grid_to_string(&self.grid).lines().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::PatternLibrary;

    fn blinker_simulation() -> Simulation {
        let mut grid = Grid::new(5, 5).unwrap();
        PatternLibrary::standard().seed_named(&mut grid, "BLINKER", 2, 1).unwrap();
        Simulation::new(grid)
    }

    #[test]
    fn test_generation_counter() {
        let mut sim = Simulation::new(Grid::new(3, 3).unwrap());
        assert_eq!(sim.generation(), 0);
        sim.evolve();
        assert_eq!(sim.generation(), 1);
        sim.evolve_n(5);
        assert_eq!(sim.generation(), 6);
    }

    #[test]
    fn test_simulate_observes_every_generation() {
        let mut sim = blinker_simulation();
        let mut seen = Vec::new();
        sim.simulate(3, |s| seen.push((s.generation(), s.grid().count_live_cells())));

        assert_eq!(seen, vec![(0, 3), (1, 3), (2, 3), (3, 3)]);
        assert_eq!(sim.generation(), 3);
    }

    #[test]
    fn test_simulate_zero_generations() {
        let mut sim = blinker_simulation();
        let mut calls = 0;
        sim.simulate(0, |_| calls += 1);
        assert_eq!(calls, 1);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_extinction() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_alive(1, 1, true).unwrap();
        let mut sim = Simulation::new(grid);
        assert!(!sim.is_extinct());
        sim.evolve();
        assert!(sim.is_extinct());
    }

    #[test]
    fn test_snapshot() {
        let mut sim = blinker_simulation();
        sim.evolve();
        let snapshot = sim.snapshot();

        assert_eq!(snapshot.generation, 1);
        assert_eq!((snapshot.width, snapshot.height), (5, 5));
        assert_eq!(snapshot.live_cells, 3);
        assert_eq!(snapshot.living, vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(snapshot.rows[1], "00100");

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
