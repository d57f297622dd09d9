/// State of a single grid position.
///
/// Kept as its own type rather than a `bool` so renderers can map each state to a distinct
/// glyph.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Live,
}

impl Cell {
    pub const fn is_live(self) -> bool {
        matches!(self, Cell::Live)
    }

    pub const fn is_dead(self) -> bool {
        matches!(self, Cell::Dead)
    }

    /// Pick `live` or `dead` depending on the state of the cell.
    pub const fn glyph(self, live: char, dead: char) -> char {
        match self {
            Cell::Live => live,
            Cell::Dead => dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(live: bool) -> Self {
        if live { Cell::Live } else { Cell::Dead }
    }
}
