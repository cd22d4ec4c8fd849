//! Grid representation for Game of Life

use super::error::GridError;
use super::rules::GameOfLifeRules;
use crate::config::BoundaryCondition;
use itertools::iproduct;
use std::fmt;

/// A fixed-size Game of Life grid.
///
/// Cells are stored row-major; `width` counts columns and `height` counts rows.
/// The dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    boundary_condition: BoundaryCondition,
}

fn positive_dimension<T>(value: T) -> Option<usize>
where
    T: TryInto<usize>,
{
    value.try_into().ok().filter(|&v| v > 0)
}

impl Grid {
    /// Create a grid with every cell dead and non-wrapping edges.
    ///
    /// Accepts any integer type so that negative sizes are reported as
    /// [`GridError::InvalidDimension`] rather than rejected by the caller's
    /// conversion.
    pub fn new<W, H>(width: W, height: H) -> Result<Self, GridError>
    where
        W: TryInto<usize> + Copy + fmt::Display,
        H: TryInto<usize> + Copy + fmt::Display,
    {
        Self::with_boundary(width, height, BoundaryCondition::Dead)
    }

    /// Create an empty grid with an explicit boundary condition
    pub fn with_boundary<W, H>(
        width: W,
        height: H,
        boundary_condition: BoundaryCondition,
    ) -> Result<Self, GridError>
    where
        W: TryInto<usize> + Copy + fmt::Display,
        H: TryInto<usize> + Copy + fmt::Display,
    {
        let dims = positive_dimension(width).zip(positive_dimension(height));
        // Vec<bool> cannot hold more than isize::MAX cells
        let area = dims.and_then(|(w, h)| w.checked_mul(h)).filter(|&n| n <= isize::MAX as usize);

        match (dims, area) {
            (Some((w, h)), Some(area)) => Ok(Self {
                width: w,
                height: h,
                cells: vec![false; area],
                boundary_condition,
            }),
            _ => Err(GridError::InvalidDimension {
                width: width.to_string(),
                height: height.to_string(),
            }),
        }
    }

    /// Create a grid from rows of booleans
    pub fn from_cells(
        cells: Vec<Vec<bool>>,
        boundary_condition: BoundaryCondition,
    ) -> Result<Self, GridError> {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);

        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimension {
                width: width.to_string(),
                height: height.to_string(),
            });
        }

        if let Some((row, r)) = cells.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::RaggedRows {
                row,
                len: r.len(),
                expected: width,
            });
        }

        Ok(Self {
            width,
            height,
            cells: cells.into_iter().flatten().collect(),
            boundary_condition,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn boundary_condition(&self) -> BoundaryCondition {
        self.boundary_condition
    }

    /// Whether (row, col) lies inside the grid
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get the state of a cell
    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the state of a cell
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Count live cells in the Moore neighborhood of (row, col)
    pub fn live_neighbor_count(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.checked_index(row, col)?;
        Ok(self.count_neighbors(row, col))
    }

    /// Neighbor count for a coordinate already known to be in range
    pub(crate) fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dr, dc)| self.is_neighbor_alive(row as isize + dr, col as isize + dc))
            .count() as u8
    }

    fn is_neighbor_alive(&self, row: isize, col: isize) -> bool {
        let (height, width) = (self.height as isize, self.width as isize);
        match self.boundary_condition {
            BoundaryCondition::Dead => {
                (0..height).contains(&row)
                    && (0..width).contains(&col)
                    && self.cells[self.index(row as usize, col as usize)]
            }
            BoundaryCondition::Wrap => {
                let r = row.rem_euclid(height) as usize;
                let c = col.rem_euclid(width) as usize;
                self.cells[self.index(r, c)]
            }
        }
    }

    /// Current state of an in-range cell
    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Advance exactly one generation.
    ///
    /// The next generation is computed in full from the current cells before
    /// it replaces them.
    pub fn step(&mut self) {
        self.cells = GameOfLifeRules::next_generation(self);
    }

    /// Total number of live cells
    pub fn count_live_cells(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Coordinates of all live cells in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(row, col)| self.cell(row, col))
            .collect()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.cell(row, col) { '█' } else { '░' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.count_live_cells(), 0);
        assert!(grid.is_empty());
        assert_eq!(grid.boundary_condition(), BoundaryCondition::Dead);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(Grid::new(0, 5), Err(GridError::InvalidDimension { .. })));
        assert!(matches!(Grid::new(5, -1), Err(GridError::InvalidDimension { .. })));
        assert!(matches!(Grid::new(-5, 5), Err(GridError::InvalidDimension { .. })));
        assert!(matches!(Grid::new(0usize, 0usize), Err(GridError::InvalidDimension { .. })));

        let err = Grid::new(5, -1).unwrap_err();
        assert_eq!(err.to_string(), "invalid grid dimensions: 5x-1");
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        assert!(matches!(
            Grid::new(1usize << 33, 1usize << 33),
            Err(GridError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Grid::new(usize::MAX, 2usize),
            Err(GridError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Grid::with_boundary(isize::MAX as usize, 2usize, BoundaryCondition::Wrap),
            Err(GridError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
        ];
        let grid = Grid::from_cells(cells, BoundaryCondition::Dead).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.count_live_cells(), 3);
        assert_eq!(grid.living_cells(), vec![(0, 0), (0, 2), (1, 1)]);
    }

    #[test]
    fn test_from_cells_rejects_bad_shapes() {
        assert!(matches!(
            Grid::from_cells(vec![], BoundaryCondition::Dead),
            Err(GridError::InvalidDimension { .. })
        ));
        assert_eq!(
            Grid::from_cells(vec![vec![true, true], vec![true]], BoundaryCondition::Dead),
            Err(GridError::RaggedRows { row: 1, len: 1, expected: 2 })
        );
    }

    #[test]
    fn test_cell_access_bounds() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set_alive(2, 3, true).unwrap();
        assert!(grid.is_alive(2, 3).unwrap());
        assert!(!grid.is_alive(0, 0).unwrap());

        assert_eq!(
            grid.is_alive(3, 0),
            Err(GridError::OutOfBounds { row: 3, col: 0, width: 4, height: 3 })
        );
        assert!(matches!(grid.set_alive(0, 4, true), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(grid.live_neighbor_count(5, 5), Err(GridError::OutOfBounds { .. })));
        assert_eq!(grid.count_live_cells(), 1);
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells, BoundaryCondition::Dead).unwrap();

        assert_eq!(grid.live_neighbor_count(1, 1).unwrap(), 8);
        assert_eq!(grid.live_neighbor_count(0, 0).unwrap(), 2);
        assert_eq!(grid.live_neighbor_count(0, 1).unwrap(), 4);
    }

    #[test]
    fn test_lone_corner_cell_does_not_wrap() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_alive(0, 0, true).unwrap();

        assert_eq!(grid.live_neighbor_count(0, 0).unwrap(), 0);
        // The opposite corner would see (0, 0) only if edges wrapped
        assert_eq!(grid.live_neighbor_count(4, 4).unwrap(), 0);

        grid.step();
        assert!(!grid.is_alive(0, 0).unwrap());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_boundary_conditions() {
        let cells = vec![
            vec![true, false],
            vec![false, true],
        ];

        let grid_dead = Grid::from_cells(cells.clone(), BoundaryCondition::Dead).unwrap();
        assert_eq!(grid_dead.live_neighbor_count(0, 0).unwrap(), 1);

        // On a 2x2 torus four of the eight directions land on (1, 1)
        let grid_wrap = Grid::from_cells(cells, BoundaryCondition::Wrap).unwrap();
        assert_eq!(grid_wrap.live_neighbor_count(0, 0).unwrap(), 4);
    }

    #[test]
    fn test_wrap_sees_opposite_corner() {
        let mut grid = Grid::with_boundary(5, 5, BoundaryCondition::Wrap).unwrap();
        grid.set_alive(4, 4, true).unwrap();
        assert_eq!(grid.live_neighbor_count(0, 0).unwrap(), 1);
        assert_eq!(grid.live_neighbor_count(2, 2).unwrap(), 0);
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let mut grid = Grid::new(6, 4).unwrap();
        for _ in 0..10 {
            grid.step();
        }
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 4);
    }

    #[test]
    fn test_step_reads_only_previous_generation() {
        // Horizontal line becomes vertical; an in-place update would not
        let mut grid = Grid::new(5, 5).unwrap();
        for col in 1..=3 {
            grid.set_alive(2, col, true).unwrap();
        }
        grid.step();
        assert_eq!(grid.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        let mut grid = Grid::with_boundary(8, 8, BoundaryCondition::Wrap).unwrap();
        for (row, col) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            grid.set_alive(row, col, true).unwrap();
        }
        let start = grid.clone();

        // Four generations move the glider one cell down and right
        for _ in 0..4 {
            grid.step();
        }
        assert_eq!(grid.living_cells(), vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);

        // Crossing both edges does not lose any cells
        for _ in 4..32 {
            grid.step();
            assert_eq!(grid.count_live_cells(), 5);
        }
        assert_eq!(grid, start);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_alive(0, 1, true).unwrap();
        assert_eq!(grid.to_string(), "░█░\n░░░\n");
    }
}
