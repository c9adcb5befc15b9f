//! Per-material movement rules dispatched from the tick loop.

mod powder;

use rand::Rng;

use crate::api::Neighborhood;
use crate::cell::{Behavior, Material};

/// Decide where the particle at the view's origin moves this tick.
///
/// Returns the destination offset, or `None` to stay put. Pure: the grid is
/// only read here, `Grid::move_to` performs the mutation.
pub fn movement_rule<R: Rng + ?Sized>(
    material: Material,
    view: &Neighborhood,
    rng: &mut R,
) -> Option<(i32, i32)> {
    match material.behavior() {
        Behavior::Powder => powder::next_offset(view, rng),
        Behavior::Solid => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::Grid;
    use proptest::prelude::*;

    fn material_counts(grid: &Grid) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for cell in grid.cells() {
            counts[cell.id() as usize] += 1;
        }
        counts
    }

    fn arb_cell_id() -> impl Strategy<Value = u8> {
        prop_oneof![Just(0u8), Just(Material::Sand as u8), Just(Material::Cobble as u8)]
    }

    fn grid_from_ids(size: usize, ids: &[u8], seed: u64) -> Grid {
        let mut grid = Grid::with_seed(size, size, seed).unwrap();
        for (i, &id) in ids.iter().enumerate() {
            if let Some(m) = Material::from_id(id) {
                grid.place((i % size) as i32, (i / size) as i32, m);
            }
        }
        grid
    }

    #[test]
    fn solid_rule_never_moves() {
        let grid = Grid::with_seed(3, 3, 0).unwrap();
        let view = Neighborhood::new(&grid, 1, 1);
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            assert_eq!(movement_rule(Material::Cobble, &view, &mut rng), None);
        }
    }

    proptest! {
        #[test]
        fn prop_cobble_only_grid_never_changes(
            ids in proptest::collection::vec(prop_oneof![Just(0u8), Just(2u8)], 16 * 16),
            ticks in 1usize..8,
        ) {
            let mut grid = grid_from_ids(16, &ids, 1);
            let before: Vec<Cell> = grid.cells().to_vec();
            for _ in 0..ticks {
                prop_assert_eq!(grid.tick(), 0);
            }
            prop_assert_eq!(grid.cells(), before.as_slice());
        }
    }

    proptest! {
        #[test]
        fn prop_material_conservation_on_movement(
            ids in proptest::collection::vec(arb_cell_id(), 16 * 16),
            seed in any::<u64>(),
        ) {
            let mut grid = grid_from_ids(16, &ids, seed);
            let before = material_counts(&grid);
            grid.tick();
            prop_assert_eq!(material_counts(&grid), before);
        }
    }

    proptest! {
        #[test]
        fn prop_stored_position_matches_cell(
            ids in proptest::collection::vec(arb_cell_id(), 12 * 12),
            seed in any::<u64>(),
            ticks in 1usize..6,
        ) {
            let mut grid = grid_from_ids(12, &ids, seed);
            for _ in 0..ticks {
                grid.tick();
            }
            for (x, y, p) in grid.iter_occupied() {
                prop_assert_eq!(p.position(), (x, y));
            }
        }
    }
}
