//! Injected randomness for generation
//!
//! Generation only ever needs a fair coin and a uniform pick from a short
//! list. Keeping that behind a trait lets tests script exact decisions while
//! the binary runs on a seeded generator.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the random decisions made during generation
pub trait RandomSource {
    /// Fair coin flip
    fn next_bool(&mut self) -> bool;

    /// Uniform index in `0..len`
    ///
    /// Callers never pass `len == 0`; implementations may return anything
    /// in that case.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform pick from a slice, `None` when the slice is empty
    fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let index = self.pick_index(items.len());
        items.get(index).copied()
    }
}

/// Seeded random source for reproducible maps
///
/// The same seed always yields the same sequence of generated maps.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source from a freshly drawn seed
    ///
    /// The seed is kept so that a run can be reported and replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this source was created with
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_bool(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

impl<R: RandomSource> RandomSource for &mut R {
    fn next_bool(&mut self) -> bool {
        (**self).next_bool()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}
