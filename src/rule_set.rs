use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::cell::Cell;
use crate::parse_util;
use crate::parse_util::ParseError;

/// Largest number of live cells in a Moore neighborhood
pub const MAX_NEIGHBORS: u8 = 8;

const COUNT_MASK: u16 = 0x1FF;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Missing '/' separator between births and survivals")]
    MissingSeparator,

    #[error("Expected a neighbor count, found '{got}'")]
    InvalidCharacter { got: char },

    #[error("Neighbor count {count} is out of range (0 to 8)")]
    CountOutOfRange { count: u8 },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Born/Survive rule of a Life-like automaton.
///
/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
/// where bit `n` of either half is set if `n` live neighbors are part of that set.
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0001_0000_0000_0000_0001
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// # Format
///
/// `[Bb]?[0-8]*/[Ss]?[0-8]*`, e.g. `3/23` or `B3/S23`.
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & COUNT_MASK;
        let s = s & COUNT_MASK;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    /// Build a rule from lists of neighbor counts.
    pub fn from_counts(births: &[u8], survivals: &[u8]) -> Result<Self, RuleError> {
        Ok(Self::new(counts_to_mask(births)?, counts_to_mask(survivals)?))
    }

    fn births_mask(&self) -> u16 {
        ((self.rule >> 0x10) as u16) & COUNT_MASK
    }

    fn survivals_mask(&self) -> u16 {
        (self.rule as u16) & COUNT_MASK
    }

    /// Whether a dead cell with `n` live neighbors comes alive
    pub fn born(&self, n: u8) -> bool {
        n <= MAX_NEIGHBORS && self.births_mask() & (1 << n) != 0
    }

    /// Whether a live cell with `n` live neighbors stays alive
    pub fn survives(&self, n: u8) -> bool {
        n <= MAX_NEIGHBORS && self.survivals_mask() & (1 << n) != 0
    }

    /// Birth counts, in increasing order
    pub fn births(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=MAX_NEIGHBORS).filter(move |&n| self.born(n))
    }

    /// Survival counts, in increasing order
    pub fn survivals(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=MAX_NEIGHBORS).filter(move |&n| self.survives(n))
    }

    /// Next state of `cell` given its number of live neighbors.
    ///
    /// A live cell dies unless `live_neighbors` is a survival count. Otherwise a birth count
    /// makes the cell live, and anything else leaves it as it was.
    pub fn next(&self, cell: Cell, live_neighbors: u8) -> Cell {
        if cell.is_live() && !self.survives(live_neighbors) {
            Cell::Dead
        } else if self.born(live_neighbors) {
            Cell::Live
        } else {
            cell
        }
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({self})")
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in self.births() {
            write!(f, "{n}")?;
        }

        f.write_str("/S")?;
        for n in self.survivals() {
            write!(f, "{n}")?;
        }

        Ok(())
    }
}

impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s.as_bytes())
    }
}

/// Parse rules that look like `3/23` or `B3/S23`
fn parse_rule(bytes: &[u8]) -> Result<RuleSet, RuleError> {
    let bytes = parse_util::take_ws(bytes);
    let (_, bytes) = parse_util::take_if(|b| b == b'b' || b == b'B', bytes);

    let (b, bytes) = parse_util::take_until(b'/', bytes);
    let Ok(bytes) = parse_util::expect(b'/', bytes) else {
        return Err(RuleError::MissingSeparator);
    };

    let (_, bytes) = parse_util::take_if(|b| b == b's' || b == b'S', bytes);
    let (s, bytes) = parse_util::take_until_ws(bytes);
    parse_util::expect_end(bytes)?;

    let b = bytes_to_mask(b)?;
    let s = bytes_to_mask(s)?;

    Ok(RuleSet::new(b, s))
}

/// Convert the human readable birth/survival digits to a packed bit representation
fn bytes_to_mask(bytes: &[u8]) -> Result<u16, RuleError> {
    let counts = bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(RuleError::InvalidCharacter { got: b as char })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    counts_to_mask(&counts)
}

fn counts_to_mask(counts: &[u8]) -> Result<u16, RuleError> {
    let mut mask: u16 = 0;

    for &count in counts {
        if count > MAX_NEIGHBORS {
            return Err(RuleError::CountOutOfRange { count });
        }

        if mask & (1 << count) != 0 {
            warn!("Neighbor count {count} listed more than once in rule");
        }

        mask |= 1 << count;
    }

    Ok(mask)
}
