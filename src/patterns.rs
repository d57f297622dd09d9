use crate::Coord;
use crate::cell::Cell;
use crate::life::Life;

/// A small seed, given as the live cells of its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    cells: &'static [(Coord, Coord)],
}

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const PATTERNS: [Pattern; 4] = [GLIDER, BLINKER, BLOCK, R_PENTOMINO];

impl Pattern {
    /// Look up a builtin pattern by name
    pub fn find(name: &str) -> Option<Pattern> {
        PATTERNS
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.cells.iter().copied()
    }

    /// Width and height of the bounding box
    pub fn size(&self) -> (Coord, Coord) {
        let w = self.cells().map(|(x, _)| x + 1).max().unwrap_or(0);
        let h = self.cells().map(|(_, y)| y + 1).max().unwrap_or(0);

        (w, h)
    }

    /// Bring the pattern to life with its top left corner at `(dx, dy)`. Returns how many cells
    /// landed inside the grid.
    ///
    /// Cells whose position overflows a [`Coord`] are off the grid and skipped.
    pub fn stamp(&self, life: &mut Life, dx: Coord, dy: Coord) -> usize {
        self.cells()
            .filter(|&(x, y)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(x), Some(y)) => life.set(Cell::Live, x, y),
                _ => false,
            })
            .count()
    }

    /// Like [`Pattern::stamp`], centered on the grid.
    pub fn stamp_centered(&self, life: &mut Life) -> usize {
        let (w, h) = self.size();
        let dx = (life.width() as Coord - w) / 2;
        let dy = (life.height() as Coord - h) / 2;

        self.stamp(life, dx, dy)
    }
}
