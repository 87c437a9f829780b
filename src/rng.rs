use chrono::Utc;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded random number generator for reproducible shuffles.
///
/// Each `DeckRng` owns its own generator state, so callers decide the
/// scope of determinism instead of sharing hidden global state. The
/// same seed always yields the same shuffle sequence.
#[derive(Clone)]
pub struct DeckRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new DeckRng from an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        DeckRng { rng, seed }
    }

    /// Create a new DeckRng seeded from the current UTC wall-clock
    /// time in nanoseconds, for non-reproducible shuffles.
    pub fn from_time() -> Self {
        // timestamp_nanos_opt only fails outside the years 1677-2262
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        Self::from_seed(nanos as u64)
    }

    /// Get the seed used for this RNG, so a time-seeded shuffle can be
    /// replayed later.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in range [0, max)
    pub fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// Shuffle a mutable slice in place.
    ///
    /// Fisher-Yates, inclusive-range variant: walks i from the front,
    /// draws j uniform in [0, i], swaps. One draw per element, uniform
    /// over all n! orderings.
    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        for i in 0..cards.len() {
            let j = self.random_range(i + 1);
            cards.swap(i, j);
        }
    }

    /// Like [`shuffle`](Self::shuffle), but non-destructive: clones the
    /// slice, shuffles the clone, and returns it. Draw semantics are
    /// identical to the in-place variant.
    pub fn shuffled<T: Clone>(&mut self, cards: &[T]) -> Vec<T> {
        let mut copy = cards.to_vec();
        self.shuffle(&mut copy);
        copy
    }
}
