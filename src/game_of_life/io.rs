//! Text I/O for Game of Life grids
//!
//! One line per row. `O`, `*`, `█` and `1` are alive; `.`, space, `░` and `0`
//! are dead. Short rows are padded with dead cells.

use super::Grid;
use crate::config::BoundaryCondition;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Map one grid character to a cell state
pub fn cell_from_char(ch: char) -> Option<bool> {
    match ch {
        'O' | '*' | '█' | '1' => Some(true),
        '.' | ' ' | '░' | '0' => Some(false),
        _ => None,
    }
}

/// Load a grid from a text file
pub fn load_grid_from_file<P: AsRef<Path>>(
    path: P,
    boundary_condition: BoundaryCondition,
) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content, boundary_condition)
        .with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))
}

/// Read a grid from any reader, typically standard input
pub fn load_grid_from_reader<R: Read>(
    mut reader: R,
    boundary_condition: BoundaryCondition,
) -> Result<Grid> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("Failed to read grid from input")?;
    parse_grid_from_string(&content, boundary_condition)
}

/// Parse a grid from its string representation
pub fn parse_grid_from_string(content: &str, boundary_condition: BoundaryCondition) -> Result<Grid> {
    let lines: Vec<&str> = content.lines().map(str::trim_end).collect();
    let first = lines.iter().position(|line| !line.is_empty());
    let last = lines.iter().rposition(|line| !line.is_empty());

    let lines = match (first, last) {
        (Some(first), Some(last)) => &lines[first..=last],
        _ => anyhow::bail!("Grid input is empty or contains no rows"),
    };

    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut cells = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(width);
        for (col_idx, ch) in line.chars().enumerate() {
            match cell_from_char(ch) {
                Some(alive) => row.push(alive),
                None => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {})",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        row.resize(width, false);
        cells.push(row);
    }

    let grid = Grid::from_cells(cells, boundary_condition)?;
    debug!(width = grid.width(), height = grid.height(), live = grid.count_live_cells(), "parsed grid");
    Ok(grid)
}

/// Convert a grid to its '1'/'0' string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height() * (grid.width() + 1));

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            result.push(if grid.cell(row, col) { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Save a grid to a text file, creating parent directories as needed
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, grid_to_string(grid))
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Write example starting grids into a directory and return the files
/// written. Existing files are kept unless `overwrite` is set.
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P, overwrite: bool) -> Result<Vec<PathBuf>> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("glider.txt", ".O...\n..O..\nOOO..\n.....\n.....\n"),
        ("blinker.txt", ".....\n.....\n.OOO.\n.....\n.....\n"),
        ("block.txt", "....\n.OO.\n.OO.\n....\n"),
        ("beacon.txt", "OO..\nOO..\n..OO\n..OO\n"),
    ];

    let mut written = Vec::new();
    for (name, content) in examples {
        let path = dir.join(name);
        if path.exists() && !overwrite {
            debug!(path = %path.display(), "keeping existing example grid");
            continue;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
