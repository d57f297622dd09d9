use crate::grid::Grid;

/// Something that owns a [`Grid`] and knows how to advance it.
pub trait Automaton {
    /// Read-only view of the current cells
    fn grid(&self) -> &Grid;

    /// Advance by one generation.
    fn step(&mut self);

    /// Advance by `n` generations.
    fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }
}
