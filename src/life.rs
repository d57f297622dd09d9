use thiserror::Error;
use tracing::debug;
use tracing::trace;

use crate::Coord;
use crate::automaton::Automaton;
use crate::cell::Cell;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::rule_set::RuleError;
use crate::rule_set::RuleSet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("Invalid rule: {0}")]
    Rule(#[from] RuleError),
}

/// Offsets of the 8 cells around a position
const MOORE: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A pending write, collected while scanning a generation
#[derive(Debug, Clone, Copy)]
struct Update {
    x: Coord,
    y: Coord,
    cell: Cell,
}

/// A bounded Life-like automaton.
///
/// Everything past the edges of the grid counts as dead, so patterns that reach the border lose
/// the neighbors they would have had on an infinite plane.
#[derive(Debug, Clone)]
pub struct Life {
    grid: Grid,
    rule: RuleSet,
    generation: u64,

    // Reused between steps to avoid reallocating every generation
    updates: Vec<Update>,
}

impl PartialEq for Life {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation && self.rule == other.rule && self.grid == other.grid
    }
}

impl Eq for Life {}

impl Life {
    pub fn new(width: usize, height: usize, rule: RuleSet) -> Result<Self, LifeError> {
        let grid = Grid::new(width, height)?;

        debug!(width, height, %rule, "Created life automaton");

        Ok(Self {
            grid,
            rule,
            generation: 0,
            updates: Vec::new(),
        })
    }

    /// Like [`Life::new`], with the rule given in `born/survive` notation.
    pub fn with_rulestring(width: usize, height: usize, rule: &str) -> Result<Self, LifeError> {
        let rule: RuleSet = rule.parse()?;

        Self::new(width, height, rule)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn rule(&self) -> RuleSet {
        self.rule
    }

    /// Number of steps taken since construction or the last [`Life::reset`]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn get(&self, x: Coord, y: Coord) -> Cell {
        self.grid.get(x, y)
    }

    pub fn set(&mut self, cell: Cell, x: Coord, y: Coord) -> bool {
        self.grid.set(cell, x, y)
    }

    pub fn reset(&mut self) {
        self.grid.reset();
        self.generation = 0;
    }

    /// Count the live cells of the Moore neighborhood of `(x, y)`.
    pub fn live_neighbors(&self, x: Coord, y: Coord) -> u8 {
        MOORE
            .iter()
            .filter(|&&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(x), Some(y)) => self.grid.get(x, y).is_live(),
                _ => false,
            })
            .count() as u8
    }

    /// Advance by one generation.
    ///
    /// Every cell is read from the current generation. Changes are collected first and applied
    /// once the scan is over, so a cell that was just decided never leaks into the neighbor count
    /// of another cell.
    pub fn step(&mut self) {
        let mut updates = std::mem::take(&mut self.updates);
        updates.clear();

        for y in 0..self.grid.height() as Coord {
            for x in 0..self.grid.width() as Coord {
                let cell = self.grid.get(x, y);
                let next = self.rule.next(cell, self.live_neighbors(x, y));

                if next != cell {
                    updates.push(Update { x, y, cell: next });
                }
            }
        }

        for &Update { x, y, cell } in &updates {
            self.grid.set(cell, x, y);
        }

        self.generation += 1;

        trace!(
            generation = self.generation,
            changed = updates.len(),
            population = self.grid.population(),
            "Stepped"
        );

        self.updates = updates;
    }
}

impl Automaton for Life {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn step(&mut self) {
        Life::step(self);
    }
}
