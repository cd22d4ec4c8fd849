//! Conway's Game of Life simulator
//!
//! A bounded-grid cellular automaton engine with a catalog of named seed
//! patterns.

pub mod config;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Grid, GridError, Pattern, PatternLibrary, Simulation};

use anyhow::{Context, Result};

/// Build the first generation described by `settings`: either the initial
/// state file or the named pattern at its anchor on an empty grid
pub fn build_initial_grid(settings: &Settings) -> Result<Grid> {
    let boundary = settings.simulation.boundary_condition;

    if let Some(path) = &settings.seed.initial_state_file {
        return game_of_life::load_grid_from_file(path, boundary);
    }

    let mut grid = Grid::with_boundary(
        settings.simulation.width,
        settings.simulation.height,
        boundary,
    )?;
    PatternLibrary::standard()
        .seed_named(
            &mut grid,
            &settings.seed.pattern,
            settings.seed.anchor_row,
            settings.seed.anchor_col,
        )
        .with_context(|| format!("Failed to seed pattern {}", settings.seed.pattern))?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryCondition;
    use tempfile::tempdir;

    #[test]
    fn test_initial_grid_from_pattern() {
        let grid = build_initial_grid(&Settings::default()).unwrap();
        assert_eq!((grid.width(), grid.height()), (20, 20));
        assert_eq!(grid.living_cells(), vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn test_initial_grid_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("start.txt");
        std::fs::write(&path, "OO\nOO\n").unwrap();

        let mut settings = Settings::default();
        settings.seed.initial_state_file = Some(path);
        settings.simulation.boundary_condition = BoundaryCondition::Wrap;

        let grid = build_initial_grid(&settings).unwrap();
        assert_eq!(grid.count_live_cells(), 4);
        assert_eq!(grid.boundary_condition(), BoundaryCondition::Wrap);
    }

    #[test]
    fn test_initial_grid_errors() {
        let mut settings = Settings::default();
        settings.seed.pattern = "NONEXISTENT".to_string();
        let err = build_initial_grid(&settings).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GridError>(),
            Some(GridError::UnknownPattern(_))
        ));

        let mut settings = Settings::default();
        settings.seed.anchor_row = 19;
        let err = build_initial_grid(&settings).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GridError>(),
            Some(GridError::OutOfBounds { .. })
        ));
    }
}
