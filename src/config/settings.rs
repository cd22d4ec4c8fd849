//! Configuration settings for the Game of Life simulator

use crate::game_of_life::PatternLibrary;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub seed: SeedConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub generations: usize,
    pub boundary_condition: BoundaryCondition,
    /// Pause between rendered generations
    pub delay_ms: u64,
    pub stop_when_empty: bool,
}

/// How neighbors beyond the grid edge are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCondition {
    /// Cells outside the grid are permanently dead
    #[default]
    Dead,
    /// Opposite edges are adjacent (toroidal grid)
    Wrap,
}

/// Where the first generation comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub pattern: String,
    pub anchor_row: usize,
    pub anchor_col: usize,
    /// Grid file to start from instead of a pattern
    pub initial_state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_coordinates: bool,
    /// Save per-generation snapshots here when set
    pub output_directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            generations: 10,
            boundary_condition: BoundaryCondition::Dead,
            delay_ms: 250,
            stop_when_empty: false,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            pattern: "GLIDER".to_string(),
            anchor_row: 1,
            anchor_col: 1,
            initial_state_file: None,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// A relative `initial_state_file` is taken relative to the directory
    /// holding the config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            settings.resolve_relative_paths(base);
        }

        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    fn resolve_relative_paths(&mut self, base: &Path) {
        if let Some(file) = self.seed.initial_state_file.as_mut() {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;

        if sim.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        // A grid file brings its own dimensions
        if let Some(path) = &self.seed.initial_state_file {
            if !path.exists() {
                anyhow::bail!("Initial state file does not exist: {}", path.display());
            }
            return Ok(());
        }

        if sim.width == 0 || sim.height == 0 {
            anyhow::bail!("Invalid grid size: {}x{}", sim.width, sim.height);
        }

        let pattern = PatternLibrary::standard().lookup(&self.seed.pattern)?;
        let fits_rows = self.seed.anchor_row.saturating_add(pattern.height()) <= sim.height;
        let fits_cols = self.seed.anchor_col.saturating_add(pattern.width()) <= sim.width;
        if !(fits_rows && fits_cols) {
            anyhow::bail!(
                "Pattern {} ({}x{}) at ({}, {}) does not fit a {}x{} grid",
                pattern.name(),
                pattern.width(),
                pattern.height(),
                self.seed.anchor_row,
                self.seed.anchor_col,
                sim.width,
                sim.height
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref pattern) = cli_overrides.pattern {
            self.seed.pattern = pattern.clone();
        }
        if let Some(width) = cli_overrides.width {
            self.simulation.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.simulation.height = height;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(anchor_row) = cli_overrides.anchor_row {
            self.seed.anchor_row = anchor_row;
        }
        if let Some(anchor_col) = cli_overrides.anchor_col {
            self.seed.anchor_col = anchor_col;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.delay_ms = delay_ms;
        }
        if cli_overrides.wrap {
            self.simulation.boundary_condition = BoundaryCondition::Wrap;
        }
        if let Some(ref input) = cli_overrides.initial_state_file {
            self.seed.initial_state_file = Some(input.clone());
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = Some(output_dir.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub pattern: Option<String>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub generations: Option<usize>,
    pub anchor_row: Option<usize>,
    pub anchor_col: Option<usize>,
    pub delay_ms: Option<u64>,
    pub wrap: bool,
    pub initial_state_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}
