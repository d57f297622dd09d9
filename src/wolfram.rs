use std::fmt;

use thiserror::Error;

use crate::cell::Cell;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WolframError {
    #[error("Rule out of range (0 to 255): {rule}")]
    OutOfRange { rule: u32 },
}

/// Transition table of an elementary (1-D, radius 1) automaton.
///
/// # Representation
/// A cell's next state depends on the three cells above it. Those are packed into a 3 bit
/// neighborhood code
/// ```notrust
/// upper-left  upper-center  upper-right
///      4            2             1
/// ```
/// and bit `i` of the rule number is the output for code `i`. For instance rule 90
/// (`0b0101_1010`) turns `100`, `001`, `110` and `011` into live cells, which is just
/// `left ^ right`.
///
/// See: https://mathworld.wolfram.com/ElementaryCellularAutomaton.html
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WolframRule {
    number: u8,
    table: [Cell; 8],
}

impl WolframRule {
    /// Decode a rule number. Anything past `255` is an error rather than being truncated.
    pub fn new(rule: u32) -> Result<Self, WolframError> {
        let number = u8::try_from(rule).map_err(|_| WolframError::OutOfRange { rule })?;

        Ok(Self::from(number))
    }

    /// The rule number this table was decoded from
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Pack the transition table back into a rule number.
    pub fn encode(&self) -> u8 {
        self.table
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_live())
            .fold(0, |n, (i, _)| n | (1 << i))
    }

    /// Output of the rule for neighborhood `code`. Only the low 3 bits of `code` are used.
    pub fn apply(&self, code: u8) -> Cell {
        self.table[(code & 0b111) as usize]
    }

    /// Neighborhood code of the three cells above a position.
    pub fn neighborhood(left: Cell, center: Cell, right: Cell) -> u8 {
        (left.is_live() as u8) << 2 | (center.is_live() as u8) << 1 | right.is_live() as u8
    }
}

impl TryFrom<u32> for WolframRule {
    type Error = WolframError;

    fn try_from(rule: u32) -> Result<Self, Self::Error> {
        Self::new(rule)
    }
}

impl From<u8> for WolframRule {
    fn from(rule: u8) -> Self {
        let mut table = [Cell::Dead; 8];
        for (i, cell) in table.iter_mut().enumerate() {
            *cell = Cell::from((rule >> i) & 1 == 1);
        }

        Self {
            number: rule,
            table,
        }
    }
}

impl fmt::Display for WolframRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::WolframError;
    use super::WolframRule;
    use crate::cell::Cell;

    #[test]
    fn every_rule_round_trips() {
        for r in 0..256u32 {
            let rule = WolframRule::new(r).unwrap();

            assert_eq!(rule.encode() as u32, r);
            assert_eq!(rule.number() as u32, r);
        }
    }

    #[test]
    fn rule_999_is_rejected() {
        assert_eq!(
            WolframRule::new(999),
            Err(WolframError::OutOfRange { rule: 999 })
        );
        assert!(WolframRule::try_from(256u32).is_err());
    }

    #[test]
    fn neighborhood_weights() {
        use Cell::Dead as D;
        use Cell::Live as L;

        assert_eq!(WolframRule::neighborhood(D, D, L), 1);
        assert_eq!(WolframRule::neighborhood(D, L, D), 2);
        assert_eq!(WolframRule::neighborhood(L, D, D), 4);
        assert_eq!(WolframRule::neighborhood(L, L, L), 7);
    }

    #[test]
    fn rule_30_table() {
        // 30 = 0b0001_1110
        let rule = WolframRule::new(30).unwrap();
        let live: Vec<u8> = (0..8).filter(|&c| rule.apply(c).is_live()).collect();

        assert_eq!(live, [1, 2, 3, 4]);
    }

    #[test]
    fn from_u8_matches_new() {
        assert_eq!(WolframRule::from(110u8), WolframRule::new(110).unwrap());
    }

    #[test]
    fn display() {
        assert_eq!(WolframRule::from(90u8).to_string(), "rule 90");
    }
}
