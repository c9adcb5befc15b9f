//! Falling sand cellular automaton core.

pub mod api;
pub mod cell;
pub mod config;
pub mod driver;
pub mod elements;
pub mod input;
pub mod spawner;
pub mod universe;

use api::Neighborhood;
use cell::{Cell, Color, Material, Particle};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use config::{ConfigError, SimulationConfig};
pub use driver::Driver;
pub use spawner::{BrushShape, Spawner};
pub use universe::Universe;

/// 2D grid of cells, fixed size for its lifetime.
///
/// The only owner of occupancy: every mutation goes through `place`,
/// `move_to` or `clear`. Out-of-bounds coordinates are rejected, never indexed.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    generation: u64,
    rng: StdRng,
}

impl Grid {
    /// Grid seeded from OS entropy.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDimensions`] for a zero or oversized dimension.
    pub fn new(cols: usize, rows: usize) -> Result<Self, ConfigError> {
        Self::with_rng(cols, rows, StdRng::from_entropy())
    }

    /// Grid with a reproducible movement RNG.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDimensions`] for a zero or oversized dimension.
    pub fn with_seed(cols: usize, rows: usize, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(cols, rows, StdRng::seed_from_u64(seed))
    }

    /// Grid sized from a canvas in pixels, one cell per `pixel_size` square.
    ///
    /// # Errors
    /// Fails if `pixel_size` is zero or does not divide both canvas sides.
    pub fn from_canvas(width: usize, height: usize, pixel_size: usize) -> Result<Self, ConfigError> {
        let (cols, rows) = config::grid_dimensions(width, height, pixel_size)?;
        Self::new(cols, rows)
    }

    fn with_rng(cols: usize, rows: usize, rng: StdRng) -> Result<Self, ConfigError> {
        let max = i32::MAX as usize;
        if cols == 0 || rows == 0 || cols > max || rows > max || cols.checked_mul(rows).is_none() {
            return Err(ConfigError::InvalidDimensions { cols, rows });
        }
        log::debug!("grid created: {cols}x{rows}");
        Ok(Self {
            width: cols,
            height: rows,
            cells: vec![Cell::Empty; cols * rows],
            generation: 0,
            rng,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Completed `tick` passes.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Row-major cell storage.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    /// `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// True iff `(x, y)` is in bounds and holds no particle.
    #[must_use]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i].is_empty())
    }

    /// Create a particle at `(x, y)` if the cell is in bounds and empty.
    pub fn place(&mut self, x: i32, y: i32, material: Material) -> bool {
        match self.index(x, y) {
            Some(i) if self.cells[i].is_empty() => {
                self.cells[i] = Cell::Occupied(Particle::new(material, x, y));
                true
            }
            _ => false,
        }
    }

    /// Move the particle at `from` into the empty cell `to`.
    ///
    /// Both cells change in this one call or neither does.
    pub fn move_to(&mut self, from: (i32, i32), to: (i32, i32)) -> bool {
        let (Some(src), Some(dst)) = (self.index(from.0, from.1), self.index(to.0, to.1)) else {
            return false;
        };
        let Cell::Occupied(mut particle) = self.cells[src] else {
            return false;
        };
        if !self.cells[dst].is_empty() {
            return false;
        }
        particle.x = to.0;
        particle.y = to.1;
        self.cells[src] = Cell::Empty;
        self.cells[dst] = Cell::Occupied(particle);
        true
    }

    /// Remove and return the particle at `(x, y)`.
    pub fn clear(&mut self, x: i32, y: i32) -> Option<Particle> {
        let i = self.index(x, y)?;
        match std::mem::take(&mut self.cells[i]) {
            Cell::Occupied(p) => Some(p),
            Cell::Empty => None,
        }
    }

    pub fn clear_all(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Occupied cells in row-major order as `(x, y, particle)`.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (i32, i32, &Particle)> + '_ {
        let w = self.width;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.particle()
                .map(|p| ((i % w) as i32, (i / w) as i32, p))
        })
    }

    /// Read-only walk for renderers.
    pub fn for_each_occupied<F: FnMut(i32, i32, Color)>(&self, mut f: F) {
        for (x, y, p) in self.iter_occupied() {
            f(x, y, p.color());
        }
    }

    /// Advance the simulation by one pass and return how many particles moved.
    ///
    /// Scans bottom-to-top, left-to-right. Particles only ever move into a
    /// lower row, which has already been scanned, so nothing is visited twice
    /// in one pass. Empty cells and immobile materials are skipped.
    pub fn tick(&mut self) -> usize {
        let w = self.width as i32;
        let h = self.height as i32;
        // Rules borrow the whole grid immutably; the rng is handed back afterwards.
        let mut rng = self.rng.clone();
        let mut moved = 0;

        for y in (0..h).rev() {
            for x in 0..w {
                let Some(Cell::Occupied(particle)) = self.get(x, y) else {
                    continue;
                };
                if !particle.material.behavior().is_mobile() {
                    continue;
                }
                let view = Neighborhood::new(self, x, y);
                let Some((dx, dy)) = elements::movement_rule(particle.material, &view, &mut rng)
                else {
                    continue;
                };
                if self.move_to((x, y), (x + dx, y + dy)) {
                    moved += 1;
                }
            }
        }

        self.rng = rng;
        self.generation += 1;
        log::trace!("tick {}: {moved} particles moved", self.generation);
        moved
    }
}
