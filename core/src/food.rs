use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

/// Supplies uniformly distributed indices in `[0, len)`.
pub trait IndexSource {
    fn next_index(&mut self, len: usize) -> usize;
}

impl<F: FnMut(usize) -> usize> IndexSource for F {
    fn next_index(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Deterministic source backed by a seeded small RNG.
#[derive(Clone, Debug)]
pub struct SeededIndexSource {
    rng: SmallRng,
}

impl SeededIndexSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl IndexSource for SeededIndexSource {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Drops food on a random plain or grass-only cell and returns its index.
///
/// Draws are rejection-sampled over the whole grid, at most one draw per cell. If every draw misses, the cell is
/// picked directly among the eligible ones. Fails with [`GameError::BoardFull`] when no cell is eligible.
pub fn place_food(grid: &mut Grid, source: &mut impl IndexSource) -> Result<CellIndex> {
    let total = grid.len();
    let eligible = grid.indices_where(Cell::accepts_food).count();
    if eligible == 0 {
        log::warn!("no free cell left for food on {} cells", total);
        return Err(GameError::BoardFull);
    }

    for _ in 0..total {
        let index = source.next_index(total);
        if let Some(cell) = grid.get_mut(index) {
            if cell.accepts_food() {
                cell.insert(Cell::FOOD);
                log::debug!("placed food at {}", index);
                return Ok(index);
            }
        }
    }

    log::warn!(
        "food placement missed {} times, picking among {} free cells",
        total,
        eligible
    );
    let candidates: Vec<CellIndex> = grid.indices_where(Cell::accepts_food).collect();
    // modulo keeps a misbehaving source in range
    let index = candidates[source.next_index(eligible) % eligible];
    grid[index].insert(Cell::FOOD);
    log::debug!("placed food at {}", index);
    Ok(index)
}
