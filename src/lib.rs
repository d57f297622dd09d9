pub mod automaton;
pub mod cell;
pub mod elementary;
pub mod grid;
pub mod life;
pub mod patterns;
pub mod presets;
pub mod render;
pub mod rule_set;
pub mod wolfram;

mod parse_util;

/// Grid coordinate. Signed so that positions left of or above the grid can be asked about.
pub type Coord = i64;
