//! RNG module - seedable random source and partial Fisher-Yates draws
//!
//! Ticket and call generation both draw distinct numbers from the pool
//! `1..=pool_max`. Only the drawn prefix of the shuffle is materialized, so
//! the cost depends on how many numbers are drawn, not on the pool size. The
//! random source is injected so games can be replayed from a seed in tests.

use std::collections::HashMap;

/// A source of pseudo-random `u32` values.
///
/// Implementors only need [`next_u32`](RandomSource::next_u32); the bounded
/// draw is provided on top of it.
pub trait RandomSource {
    /// Generate the next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate a value in `[0, bound)`.
    ///
    /// Uses the high bits of the 32-bit draw (multiply-shift), which are the
    /// well-mixed bits of an LCG. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32 {
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state; `SimpleRng::new(rng.state())` continues the same sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Draw `count` distinct numbers from `1..=pool_max`, in draw order.
///
/// This is the first `count` steps of a Fisher-Yates shuffle of the pool.
/// Position `p` of the virtual pool holds `p + 1` until a swap moves another
/// value there; only moved positions are stored. One `next_below` per number.
/// `count` is capped at `pool_max`.
pub fn draw_from_pool<R: RandomSource>(rng: &mut R, pool_max: u32, count: usize) -> Vec<u32> {
    let count = count.min(pool_max as usize) as u32;
    let mut moved: HashMap<u32, u32> = HashMap::with_capacity(count as usize);
    let mut drawn = Vec::with_capacity(count as usize);

    for i in 0..count {
        let j = i + rng.next_below(pool_max - i);
        let at_j = moved.get(&j).copied().unwrap_or(j + 1);
        let at_i = moved.get(&i).copied().unwrap_or(i + 1);
        // Position i is never read again, so only j needs the swapped value.
        moved.insert(j, at_i);
        drawn.push(at_j);
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_coerced() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for bound in [1u32, 2, 3, 16, 80, u32::MAX] {
            for _ in 0..200 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_full_draw_is_a_permutation() {
        let mut rng = SimpleRng::new(99);
        let pool = draw_from_pool(&mut rng, 80, 80);

        let mut sorted = pool.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=80).collect::<Vec<_>>());
        assert_ne!(pool, sorted, "80 elements should not survive a shuffle in order");
    }

    #[test]
    fn test_partial_draw_is_distinct_and_in_range() {
        for seed in 1..50 {
            let mut rng = SimpleRng::new(seed);
            let drawn = draw_from_pool(&mut rng, 80, 40);
            assert_eq!(drawn.len(), 40);

            let mut sorted = drawn.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 40);
            assert!(drawn.iter().all(|n| (1..=80).contains(n)));
        }
    }

    #[test]
    fn test_partial_draw_matches_full_shuffle_prefix() {
        // Dense reference: the same swaps on a materialized pool.
        let mut dense_rng = SimpleRng::new(31);
        let mut pool: Vec<u32> = (1..=200).collect();
        for i in 0..64 {
            let j = i + dense_rng.next_below(200 - i as u32) as usize;
            pool.swap(i, j);
        }

        let mut rng = SimpleRng::new(31);
        assert_eq!(draw_from_pool(&mut rng, 200, 64), pool[..64].to_vec());
    }

    #[test]
    fn test_draw_cost_is_independent_of_pool_size() {
        let mut rng = SimpleRng::new(17);
        let drawn = draw_from_pool(&mut rng, u32::MAX, 64);

        let mut sorted = drawn.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 64);
        assert!(drawn.iter().all(|&n| n >= 1));
    }

    #[test]
    fn test_draw_is_capped_at_pool_size() {
        let mut rng = SimpleRng::new(3);
        assert!(draw_from_pool(&mut rng, 5, 0).is_empty());
        let mut all = draw_from_pool(&mut rng, 5, 10);
        all.sort_unstable();
        assert_eq!(all, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(42);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
