//! Configuration management for the Game of Life simulator

pub mod settings;

pub use settings::{
    BoundaryCondition, CliOverrides, OutputConfig, OutputFormat, SeedConfig, Settings,
    SimulationConfig,
};
