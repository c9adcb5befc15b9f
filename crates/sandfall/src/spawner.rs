//! Soft-edged brush: turns one spawn request into density-gated placements.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::cell::Material;
use crate::Grid;

/// How brush candidates are chosen around the center cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushShape {
    /// Every cell within `radius`, each gated by spawn density.
    #[default]
    Disc,
    /// `particles_per_tick` random polar samples within `radius`.
    Scatter { particles_per_tick: u32 },
}

#[derive(Debug)]
pub struct Spawner {
    radius: i32,
    shape: BrushShape,
    rng: StdRng,
}

impl Spawner {
    #[must_use]
    pub fn new(radius: i32, shape: BrushShape) -> Self {
        Self::with_rng(radius, shape, StdRng::from_entropy())
    }

    #[must_use]
    pub fn with_seed(radius: i32, shape: BrushShape, seed: u64) -> Self {
        Self::with_rng(radius, shape, StdRng::seed_from_u64(seed))
    }

    fn with_rng(radius: i32, shape: BrushShape, rng: StdRng) -> Self {
        let radius = radius.max(0);
        log::debug!("spawner created: radius {radius}, shape {shape:?}");
        Self { radius, shape, rng }
    }

    #[must_use]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    #[must_use]
    pub fn shape(&self) -> BrushShape {
        self.shape
    }

    /// Spawn `material` around `(cx, cy)` and return how many particles were placed.
    ///
    /// Occupied and out-of-bounds candidates are skipped; nothing is overwritten.
    pub fn spawn(&mut self, grid: &mut Grid, cx: i32, cy: i32, material: Material) -> usize {
        self.spawn_with_density(grid, cx, cy, material, material.spawn_density())
    }

    pub(crate) fn spawn_with_density(
        &mut self,
        grid: &mut Grid,
        cx: i32,
        cy: i32,
        material: Material,
        density: f64,
    ) -> usize {
        if !self.reaches(grid, cx, cy) {
            return 0;
        }
        let candidates = match self.shape {
            BrushShape::Disc => self.disc_cells(grid, cx, cy),
            BrushShape::Scatter { particles_per_tick } => {
                self.scatter_cells(cx, cy, particles_per_tick)
            }
        };
        let mut placed = 0;
        for (x, y) in candidates {
            if self.try_place(grid, x, y, material, density) {
                placed += 1;
            }
        }
        placed
    }

    /// Whether the brush's bounding box overlaps the grid at all.
    fn reaches(&self, grid: &Grid, cx: i32, cy: i32) -> bool {
        let r = i64::from(self.radius);
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        cx + r >= 0
            && cy + r >= 0
            && cx - r < grid.width() as i64
            && cy - r < grid.height() as i64
    }

    /// Disc cells that lie inside the grid, row-major.
    fn disc_cells(&self, grid: &Grid, cx: i32, cy: i32) -> Vec<(i32, i32)> {
        // |offset| <= radius <= i32::MAX, so squares and their sum fit in i64.
        let r = i64::from(self.radius);
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let xs = (cx - r).max(0)..=(cx + r).min(grid.width() as i64 - 1);
        let ys = (cy - r).max(0)..=(cy + r).min(grid.height() as i64 - 1);
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .filter(|&(x, y)| (x - cx).pow(2) + (y - cy).pow(2) <= r * r)
            .map(|(x, y)| (x as i32, y as i32))
            .collect()
    }

    /// May repeat a cell; a repeat just fails `place`.
    fn scatter_cells(&mut self, cx: i32, cy: i32, count: u32) -> Vec<(i32, i32)> {
        let r = f64::from(self.radius);
        (0..count)
            .map(|_| {
                let angle = self.rng.gen_range(0.0..TAU);
                let distance = self.rng.gen_range(0.0..=r);
                // Float-to-int casts saturate; a saturated cell is out of bounds.
                let x = (f64::from(cx) + angle.cos() * distance).round() as i32;
                let y = (f64::from(cy) + angle.sin() * distance).round() as i32;
                (x, y)
            })
            .collect()
    }

    fn try_place(
        &mut self,
        grid: &mut Grid,
        x: i32,
        y: i32,
        material: Material,
        density: f64,
    ) -> bool {
        if !grid.in_bounds(x, y) {
            return false;
        }
        // Draw in [0, 1): density 0 never places, density 1 always does.
        let roll: f64 = self.rng.gen();
        roll < density && grid.place(x, y, material)
    }
}
