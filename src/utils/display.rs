//! Console rendering and snapshot output

use crate::config::OutputFormat;
use crate::game_of_life::{Grid, Simulation, Snapshot};
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::Serialize;
use std::path::Path;

/// Render grids and generations for the console
pub struct GridFormatter;

/// Condensed view of a whole run, written next to JSON snapshots
#[derive(Debug, Serialize)]
struct RunSummary {
    generations: usize,
    initial_live_cells: usize,
    final_live_cells: usize,
    extinct: bool,
    live_cells_per_generation: Vec<usize>,
}

impl GridFormatter {
    /// One character per cell
    pub fn format_grid_compact(grid: &Grid) -> String {
        grid.to_string()
    }

    /// Two characters per cell with column and row numbers
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let header = (0..grid.width()).map(|x| format!("{:2}", x % 10)).join("");
        let mut output = format!("   {}\n", header);

        for (y, line) in grid.to_string().lines().enumerate() {
            let cells: String = line.chars().flat_map(|ch| [ch, ch]).collect();
            output.push_str(&format!("{:2} {}\n", y, cells));
        }

        output
    }

    /// Header line plus the grid for the current generation
    pub fn format_generation(simulation: &Simulation, show_coordinates: bool) -> String {
        let grid = simulation.grid();
        let body = if show_coordinates {
            Self::format_grid_with_coords(grid)
        } else {
            Self::format_grid_compact(grid)
        };
        format!(
            "Generation {} (live: {}):\n{}",
            simulation.generation(),
            grid.count_live_cells(),
            body
        )
    }

    /// Write one file per snapshot in the requested format
    pub fn save_snapshots<P: AsRef<Path>>(
        snapshots: &[Snapshot],
        output_dir: P,
        format: OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        match format {
            OutputFormat::Text => {
                for snapshot in snapshots {
                    let filepath = output_dir.join(format!("generation_{:03}.txt", snapshot.generation));
                    let content = snapshot.rows.iter().map(|row| format!("{}\n", row)).join("");
                    std::fs::write(&filepath, content)
                        .with_context(|| format!("Failed to write {}", filepath.display()))?;
                }
            }
            OutputFormat::Json => {
                for snapshot in snapshots {
                    let filepath = output_dir.join(format!("generation_{:03}.json", snapshot.generation));
                    let json = serde_json::to_string_pretty(snapshot)?;
                    std::fs::write(&filepath, json)
                        .with_context(|| format!("Failed to write {}", filepath.display()))?;
                }

                if let (Some(first), Some(last)) = (snapshots.first(), snapshots.last()) {
                    let summary = RunSummary {
                        generations: last.generation,
                        initial_live_cells: first.live_cells,
                        final_live_cells: last.live_cells,
                        extinct: last.live_cells == 0,
                        live_cells_per_generation: snapshots.iter().map(|s| s.live_cells).collect(),
                    };
                    let summary_path = output_dir.join("run_summary.json");
                    std::fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)
                        .with_context(|| format!("Failed to write {}", summary_path.display()))?;
                }
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
