use crate::{Coords, GRID_SIZE};

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

/// Random draws tried before falling back to enumerating the grid.
const MAX_SAMPLES: usize = 1024;

/// Picks a treat cell that shares neither a row nor a column with any
/// segment of `snake`.
pub fn spawn_treat<R: Rng>(snake: &[Coords], rng: &mut R) -> Coords {
    for _ in 0..MAX_SAMPLES {
        let pos = (rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
        if is_valid_treat(pos, snake) {
            return pos;
        }
    }

    let valid: Vec<Coords> = all_cells().filter(|pos| is_valid_treat(*pos, snake)).collect();
    if let Some(pos) = valid.choose(rng) {
        return *pos;
    }

    // Every row or every column holds a segment.
    warn!("No treat cell outside the snake's rows and columns, placing on any free cell");
    let free: Vec<Coords> = all_cells().filter(|pos| !snake.contains(pos)).collect();
    match free.choose(rng) {
        Some(pos) => *pos,
        None => snake.first().copied().unwrap_or((0, 0)),
    }
}

pub fn is_valid_treat(pos: Coords, snake: &[Coords]) -> bool {
    !snake.iter().any(|seg| seg.0 == pos.0 || seg.1 == pos.1)
}

fn all_cells() -> impl Iterator<Item = Coords> {
    (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| (x, y)))
}
