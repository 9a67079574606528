use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable randomness shared by everything that rolls dice during one game.
/// Recording the seed is enough to reproduce every engine tie-break.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn from_seed_or_random(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    /// True with probability 0.5.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// True with probability `1 / n`. `n` must be non-zero.
    pub fn one_in(&mut self, n: usize) -> bool {
        self.rng.random_range(0..n) == 0
    }
}
