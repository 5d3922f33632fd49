use rand::Rng;

use crate::draw_engine::error::DrawError;
use crate::draw_engine::models::{PoolStatus, MAX_POOL_SIZE, MIN_POOL_SIZE};

/// The raffle pool: numbers 1..=N, drawn one at a time without replacement.
///
/// Holds the remaining set (ascending) and the chronological draw history.
/// After every operation: remaining ∪ drawn == {1..N} and the two are
/// disjoint, so `remaining_count() + drawn_count() == pool_size()` always.
#[derive(Debug, Clone)]
pub struct DrawPool {
    pool_size: u32,
    remaining: Vec<u32>,
    drawn: Vec<u32>,
}

impl DrawPool {
    /// Build a fresh pool of `1..=pool_size`.
    ///
    /// Fails with [`DrawError::InvalidSize`] outside `2..=1000`, before any
    /// state is created.
    pub fn new(pool_size: u32) -> Result<Self, DrawError> {
        if !(MIN_POOL_SIZE..=MAX_POOL_SIZE).contains(&pool_size) {
            return Err(DrawError::InvalidSize(pool_size));
        }
        Ok(DrawPool {
            pool_size,
            remaining: (1..=pool_size).collect(),
            drawn: Vec::with_capacity(pool_size as usize),
        })
    }

    /// Draw one number uniformly at random from the remaining set.
    ///
    /// Removes it from the remaining set and appends it to the draw history
    /// in the same call, so no observer can see one mutation without the
    /// other. Fails with [`DrawError::EmptyPool`] when nothing remains;
    /// that error never mutates state.
    ///
    /// `Vec::remove` keeps the remaining set ascending for display. O(n) per
    /// draw is fine at n ≤ 1000.
    pub fn draw_next<R: Rng>(&mut self, rng: &mut R) -> Result<u32, DrawError> {
        if self.remaining.is_empty() {
            return Err(DrawError::EmptyPool);
        }
        let idx = rng.gen_range(0..self.remaining.len());
        let value = self.remaining.remove(idx);
        self.drawn.push(value);
        Ok(value)
    }

    /// Restore the pool to `1..=N` and clear the draw history. Same N.
    pub fn reset(&mut self) {
        self.remaining = (1..=self.pool_size).collect();
        self.drawn.clear();
    }

    /// The N this pool was built with.
    pub fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// Numbers not yet drawn.
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Numbers drawn so far.
    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    /// `Open` while anything remains, `Exhausted` once the pool is empty.
    pub fn status(&self) -> PoolStatus {
        if self.remaining.is_empty() {
            PoolStatus::Exhausted
        } else {
            PoolStatus::Open
        }
    }

    /// Remaining numbers, ascending.
    pub fn remaining(&self) -> &[u32] {
        &self.remaining
    }

    /// Draw history, chronological.
    pub fn drawn(&self) -> &[u32] {
        &self.drawn
    }

    /// Most recently drawn number, if any.
    pub fn last_drawn(&self) -> Option<u32> {
        self.drawn.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fresh_pool_holds_one_through_n() {
        let pool = DrawPool::new(10).unwrap();
        assert_eq!(pool.remaining(), (1..=10).collect::<Vec<u32>>());
        assert_eq!(pool.drawn_count(), 0);
        assert_eq!(pool.status(), PoolStatus::Open);
    }

    #[test]
    fn draws_are_unique_until_exhaustion() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = DrawPool::new(25).unwrap();
        let mut seen = std::collections::HashSet::new();
        while pool.remaining_count() > 0 {
            let v = pool.draw_next(&mut rng).unwrap();
            assert!(seen.insert(v), "duplicate draw: {v}");
        }
        assert_eq!(seen.len(), 25);
        assert_eq!(pool.status(), PoolStatus::Exhausted);
    }

    #[test]
    fn remaining_stays_sorted_across_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = DrawPool::new(50).unwrap();
        for _ in 0..20 {
            pool.draw_next(&mut rng).unwrap();
            let rem = pool.remaining();
            assert!(rem.windows(2).all(|w| w[0] < w[1]), "remaining not ascending: {rem:?}");
        }
    }
}
