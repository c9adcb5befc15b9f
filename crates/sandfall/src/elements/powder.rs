//! Powder (Sand): falls straight down, then to an unbiased random diagonal.

use rand::Rng;

use crate::api::Neighborhood;

pub fn next_offset<R: Rng + ?Sized>(view: &Neighborhood, rng: &mut R) -> Option<(i32, i32)> {
    if view.is_vacant(0, 1) {
        return Some((0, 1));
    }

    // A fixed left/right order would drift piles to one side.
    match (view.is_vacant(-1, 1), view.is_vacant(1, 1)) {
        (true, true) => Some(if rng.gen_bool(0.5) { (-1, 1) } else { (1, 1) }),
        (true, false) => Some((-1, 1)),
        (false, true) => Some((1, 1)),
        (false, false) => None,
    }
}
