//! Relative-offset, read-only view used by movement rules.

use crate::Grid;

/// Out-of-bounds offsets are never vacant. Rules decide, the Grid mutates.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood<'a> {
    pub grid: &'a Grid,
    pub x: i32,
    pub y: i32,
}

impl<'a> Neighborhood<'a> {
    #[must_use]
    pub fn new(grid: &'a Grid, x: i32, y: i32) -> Self {
        Self { grid, x, y }
    }

    #[must_use]
    pub fn is_vacant(&self, dx: i32, dy: i32) -> bool {
        self.grid.is_empty(self.x + dx, self.y + dy)
    }
}
