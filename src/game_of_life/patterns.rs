//! Catalog of named starting patterns and placement onto a grid

use super::error::GridError;
use super::Grid;
use crate::config::BoundaryCondition;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tracing::debug;

/// A named arrangement of live cells.
///
/// Offsets are normalized so the smallest row offset and the smallest column
/// offset are both zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    cells: Vec<(usize, usize)>,
    width: usize,
    height: usize,
}

impl Pattern {
    /// Build a pattern from (row, col) offsets, shifting them so the bounding
    /// box starts at (0, 0)
    pub fn from_offsets<I>(name: &'static str, offsets: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut cells: Vec<(usize, usize)> = offsets.into_iter().collect();
        let min_row = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
        let min_col = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);

        for cell in &mut cells {
            *cell = (cell.0 - min_row, cell.1 - min_col);
        }
        cells.sort_unstable();
        cells.dedup();

        let height = cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let width = cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);

        Self { name, cells, width, height }
    }

    /// Build a pattern from a picture where 'O' marks a live cell
    fn from_picture(name: &'static str, rows: &[&str]) -> Self {
        let offsets = rows.iter().enumerate().flat_map(|(row, &line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == 'O')
                .map(move |(col, _)| (row, col))
        });
        Self::from_offsets(name, offsets)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Live-cell offsets, sorted row-major
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// A grid exactly the size of the pattern's bounding box, with the
    /// pattern placed at (0, 0)
    pub fn to_grid(&self, boundary_condition: BoundaryCondition) -> Result<Grid, GridError> {
        let mut grid = Grid::with_boundary(self.width, self.height, boundary_condition)?;
        PatternLibrary::seed(&mut grid, self, 0, 0)?;
        Ok(grid)
    }

    /// Anchor that centers the pattern in `grid` (clamped to the top-left
    /// when the pattern is larger than the grid)
    pub fn centered_anchor(&self, grid: &Grid) -> (usize, usize) {
        (
            grid.height().saturating_sub(self.height) / 2,
            grid.width().saturating_sub(self.width) / 2,
        )
    }
}

static STANDARD: Lazy<PatternLibrary> = Lazy::new(PatternLibrary::build_standard);

/// Immutable name -> pattern catalog
#[derive(Debug)]
pub struct PatternLibrary {
    patterns: BTreeMap<&'static str, Pattern>,
}

impl PatternLibrary {
    /// The built-in catalog, constructed on first use
    pub fn standard() -> &'static PatternLibrary {
        &STANDARD
    }

    fn build_standard() -> Self {
        let patterns = [
            Pattern::from_picture("BLINKER", &["OOO"]),
            Pattern::from_picture("GLIDER", &[".O.", "..O", "OOO"]),
            Pattern::from_picture("BLOCK", &["OO", "OO"]),
            Pattern::from_picture("BEACON", &["OO..", "OO..", "..OO", "..OO"]),
            Pattern::from_picture("TOAD", &[".OOO", "OOO."]),
            Pattern::from_picture(
                "PULSAR",
                &[
                    "..OOO...OOO..",
                    ".............",
                    "O....O.O....O",
                    "O....O.O....O",
                    "O....O.O....O",
                    "..OOO...OOO..",
                    ".............",
                    "..OOO...OOO..",
                    "O....O.O....O",
                    "O....O.O....O",
                    "O....O.O....O",
                    ".............",
                    "..OOO...OOO..",
                ],
            ),
            Pattern::from_picture(
                "GOSPER_GLIDER_GUN",
                &[
                    "........................O...........",
                    "......................O.O...........",
                    "............OO......OO............OO",
                    "...........O...O....OO............OO",
                    "OO........O.....O...OO..............",
                    "OO........O...O.OO....O.O...........",
                    "..........O.....O.......O...........",
                    "...........O...O....................",
                    "............OO......................",
                ],
            ),
        ];

        Self {
            patterns: patterns.into_iter().map(|p| (p.name, p)).collect(),
        }
    }

    /// Resolve a pattern by name.
    ///
    /// Matching ignores case and treats '-' as '_', so "gosper-glider-gun"
    /// finds GOSPER_GLIDER_GUN.
    pub fn lookup(&self, name: &str) -> Result<&Pattern, GridError> {
        let key = name.trim().to_ascii_uppercase().replace('-', "_");
        self.patterns
            .get(key.as_str())
            .ok_or_else(|| GridError::UnknownPattern(name.to_string()))
    }

    /// Catalog names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.keys().copied()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.values()
    }

    /// Place `pattern` with its top-left offset at (anchor_row, anchor_col).
    ///
    /// Every target coordinate is validated first; on `OutOfBounds` the grid
    /// is left untouched.
    pub fn seed(
        grid: &mut Grid,
        pattern: &Pattern,
        anchor_row: usize,
        anchor_col: usize,
    ) -> Result<(), GridError> {
        let targets = pattern
            .cells
            .iter()
            .map(|&(dr, dc)| {
                let row = anchor_row.saturating_add(dr);
                let col = anchor_col.saturating_add(dc);
                if grid.contains(row, col) {
                    Ok((row, col))
                } else {
                    Err(GridError::OutOfBounds {
                        row,
                        col,
                        width: grid.width(),
                        height: grid.height(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (row, col) in targets {
            grid.set_alive(row, col, true)?;
        }

        debug!(
            pattern = pattern.name,
            anchor_row, anchor_col, cells = pattern.len(), "seeded pattern"
        );
        Ok(())
    }

    /// Look up `name` and seed it onto `grid`
    pub fn seed_named(
        &self,
        grid: &mut Grid,
        name: &str,
        anchor_row: usize,
        anchor_col: usize,
    ) -> Result<(), GridError> {
        let pattern = self.lookup(name)?;
        Self::seed(grid, pattern, anchor_row, anchor_col)
    }
}
