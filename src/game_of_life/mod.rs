//! Game of Life core functionality

pub mod error;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;
pub mod simulation;

pub use error::GridError;
pub use grid::Grid;
pub use io::{create_example_grids, load_grid_from_file, load_grid_from_reader, save_grid_to_file};
pub use patterns::{Pattern, PatternLibrary};
pub use rules::GameOfLifeRules;
pub use simulation::{Simulation, Snapshot};
