use thiserror::Error;
use tracing::debug;

use crate::Coord;
use crate::automaton::Automaton;
use crate::cell::Cell;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::wolfram::WolframError;
use crate::wolfram::WolframRule;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ElementaryError {
    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("Invalid rule: {0}")]
    Rule(#[from] WolframError),
}

/// A 1-D elementary automaton, laid out as a grid where each row is one generation.
///
/// Row `0` is the seed. [`Elementary::process`] fills every following row from the row above
/// it, so after processing the grid shows the whole history top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elementary {
    grid: Grid,
    rule: WolframRule,
}

impl Elementary {
    pub fn new(width: usize, height: usize, rule: u32) -> Result<Self, ElementaryError> {
        let grid = Grid::new(width, height)?;
        let rule = WolframRule::new(rule)?;

        debug!(width, height, %rule, "Created elementary automaton");

        Ok(Self { grid, rule })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn rule(&self) -> WolframRule {
        self.rule
    }

    /// Replace the rule. The cells are left untouched.
    pub fn set_rule(&mut self, rule: u32) -> Result<(), ElementaryError> {
        self.rule = WolframRule::new(rule)?;

        Ok(())
    }

    /// Change the dimensions. All cells are dead afterwards.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), ElementaryError> {
        self.grid.resize(width, height)?;

        Ok(())
    }

    pub fn get(&self, x: Coord, y: Coord) -> Cell {
        self.grid.get(x, y)
    }

    pub fn set(&mut self, cell: Cell, x: Coord, y: Coord) -> bool {
        self.grid.set(cell, x, y)
    }

    pub fn reset(&mut self) {
        self.grid.reset();
    }

    /// Derive rows `1..height` from the seed row.
    ///
    /// Each row is computed into a buffer from the row above and only written once the whole
    /// row is known. Row `0` is never written.
    pub fn process(&mut self) {
        let width = self.grid.width() as Coord;
        let mut row = Vec::with_capacity(self.grid.width());

        for y in 1..self.grid.height() as Coord {
            row.clear();
            row.extend((0..width).map(|x| {
                let code = WolframRule::neighborhood(
                    self.grid.get(x - 1, y - 1),
                    self.grid.get(x, y - 1),
                    self.grid.get(x + 1, y - 1),
                );

                self.rule.apply(code)
            }));

            for (x, &cell) in row.iter().enumerate() {
                self.grid.set(cell, x as Coord, y);
            }
        }
    }
}

impl Automaton for Elementary {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn step(&mut self) {
        self.process();
    }
}
