//! Decouples the host's frame cadence from the number of grid passes.

use crate::Grid;

/// Borrows the grid for the duration of a frame's passes; holds no other state.
#[derive(Debug)]
pub struct Driver<'a> {
    grid: &'a mut Grid,
}

impl<'a> Driver<'a> {
    #[must_use]
    pub fn new(grid: &'a mut Grid) -> Self {
        Self { grid }
    }

    /// Run `times` grid passes and return the total number of moves.
    pub fn tick(&mut self, times: u32) -> usize {
        (0..times).map(|_| self.grid.tick()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, Material, Particle};

    #[test]
    fn tick_zero_times_is_a_noop() {
        let mut grid = Grid::with_seed(5, 5, 0).unwrap();
        grid.place(2, 0, Material::Sand);
        assert_eq!(Driver::new(&mut grid).tick(0), 0);
        assert_eq!(grid.generation(), 0);
        assert!(!grid.is_empty(2, 0));
    }

    #[test]
    fn tick_runs_n_passes() {
        let mut grid = Grid::with_seed(5, 5, 0).unwrap();
        grid.place(2, 0, Material::Sand);

        assert_eq!(Driver::new(&mut grid).tick(2), 2);
        assert_eq!(grid.generation(), 2);
        assert_eq!(
            grid.get(2, 2),
            Some(Cell::Occupied(Particle::new(Material::Sand, 2, 2)))
        );

        // Two more to reach the floor, then nothing left to move.
        assert_eq!(Driver::new(&mut grid).tick(3), 2);
        assert_eq!(grid.generation(), 5);
        assert!(!grid.is_empty(2, 4));
    }
}
