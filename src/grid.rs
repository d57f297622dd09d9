use thiserror::Error;

use crate::Coord;
use crate::cell::Cell;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid size: width {width} x height {height}, both must be positive")]
    InvalidSize { width: usize, height: usize },

    #[error("Grid of {width} x {height} cells is too large")]
    TooLarge { width: usize, height: usize },
}

/// Largest number of cells a grid may hold
pub const MAX_CELLS: usize = 1 << 26;

/// A fixed size, dense rectangle of [`Cell`]s.
///
/// Cells are stored row by row, so `(x, y)` lives at `y * width + x`. Everything outside of
/// `[0, width) x [0, height)` is considered dead: reads there return [`Cell::Dead`] and writes are
/// dropped. This lets neighbor counting walk off the edges without any special casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an all dead grid of `width` by `height` cells.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = Self::validate(width, height)?;

        Ok(Self {
            cells: vec![Cell::Dead; len],
            width,
            height,
        })
    }

    fn validate(width: usize, height: usize) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidSize { width, height });
        }

        width
            .checked_mul(height)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(GridError::TooLarge { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `(x, y)`, or [`Cell::Dead`] if it is out of bounds.
    pub fn get(&self, x: Coord, y: Coord) -> Cell {
        match self.index(x, y) {
            Some(i) => self.cells[i],
            None => Cell::Dead,
        }
    }

    /// Write `cell` at `(x, y)`. Returns `false`, leaving the grid untouched, if the position is
    /// out of bounds.
    pub fn set(&mut self, cell: Cell, x: Coord, y: Coord) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };

        self.cells[i] = cell;

        true
    }

    /// Kill every cell
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Change the dimensions of the grid. All cells are dead afterwards.
    ///
    /// On error the grid keeps its previous size and contents.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        let len = Self::validate(width, height)?;

        self.cells.clear();
        self.cells.resize(len, Cell::Dead);
        self.width = width;
        self.height = height;

        Ok(())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_live()).count()
    }

    /// Iterate over the cells of row `y`, left to right. Empty if `y` is out of bounds.
    pub fn row(&self, y: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .chunks_exact(self.width)
            .nth(y)
            .into_iter()
            .flatten()
            .copied()
    }

    fn index(&self, x: Coord, y: Coord) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::Grid;
    use super::GridError;
    use super::MAX_CELLS;
    use crate::Coord;
    use crate::cell::Cell;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(4, 3).unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 3),
            Err(GridError::InvalidSize {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::new(3, 0).is_err());
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(GridError::TooLarge {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn huge_grids_are_rejected_before_allocating() {
        assert_eq!(
            Grid::new(100_000, 100_000),
            Err(GridError::TooLarge {
                width: 100_000,
                height: 100_000
            })
        );
        assert!(Grid::new(MAX_CELLS + 1, 1).is_err());
    }

    #[test]
    fn set_then_get() {
        let mut grid = Grid::new(5, 5).unwrap();

        assert!(grid.set(Cell::Live, 2, 3));
        assert_eq!(grid.get(2, 3), Cell::Live);
        assert_eq!(grid.get(3, 2), Cell::Dead);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn set_past_right_edge_fails() {
        let mut grid = Grid::new(6, 2).unwrap();
        grid.set(Cell::Live, 5, 0);
        let before = grid.clone();

        assert!(!grid.set(Cell::Live, 6, 0));
        assert_eq!(grid, before);
    }

    #[test]
    fn set_negative_fails() {
        let mut grid = Grid::new(2, 2).unwrap();

        assert!(!grid.set(Cell::Live, -1, 0));
        assert!(!grid.set(Cell::Live, 0, -1));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn reset_kills_everything() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(Cell::Live, 0, 0);
        grid.set(Cell::Live, 2, 2);

        grid.reset();

        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn resize() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(Cell::Live, 1, 1);

        grid.resize(7, 2).unwrap();

        assert_eq!((grid.width(), grid.height()), (7, 2));
        assert_eq!(grid.population(), 0);
        assert!(grid.set(Cell::Live, 6, 1));
        assert!(!grid.set(Cell::Live, 1, 2));
    }

    #[test]
    fn failed_resize_keeps_grid() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(Cell::Live, 1, 1);
        let before = grid.clone();

        assert!(grid.resize(0, 0).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn row() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(Cell::Live, 1, 1);

        let row: Vec<_> = grid.row(1).collect();
        assert_eq!(row, [Cell::Dead, Cell::Live, Cell::Dead]);
        assert_eq!(grid.row(2).count(), 0);
    }

    proptest! {
        #[test]
        fn out_of_bounds_reads_are_dead(
            w in 1usize..32,
            h in 1usize..32,
            x in any::<Coord>(),
            y in any::<Coord>(),
        ) {
            let mut grid = Grid::new(w, h).unwrap();

            // Fill the grid so a stray in-bounds read would show up as live
            for gy in 0..h as Coord {
                for gx in 0..w as Coord {
                    grid.set(Cell::Live, gx, gy);
                }
            }

            let in_bounds = (0..w as Coord).contains(&x) && (0..h as Coord).contains(&y);
            prop_assume!(!in_bounds);

            prop_assert_eq!(grid.get(x, y), Cell::Dead);
            prop_assert!(!grid.set(Cell::Dead, x, y));
            prop_assert_eq!(grid.population(), w * h);
        }
    }
}
