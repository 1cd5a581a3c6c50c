//! Uniform random sources for resampling.
//!
//! Seeded runs use a 32-bit linear congruential generator whose integer
//! arithmetic yields the same sequence on every platform. Unseeded runs use
//! the thread-local generator from `rand`.

use optiq_domain::enums::SeedMode;
use rand::Rng;
use rand::rngs::ThreadRng;

/// 2^32 as a float, the LCG modulus.
const LCG_MODULUS: f64 = 4_294_967_296.0;

/// A source of uniform variates in `[0, 1)`.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;

    /// Draws an index in `[0, len)`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        let idx = (self.next_uniform() * len as f64).floor() as usize;
        idx.min(len - 1)
    }
}

/// Linear congruential generator, `state = state * 1664525 + 1013904223 mod 2^32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const MULTIPLIER: u32 = 1_664_525;
    const INCREMENT: u32 = 1_013_904_223;

    /// Creates a generator; the seed is reduced modulo 2^32.
    pub fn new(seed: u64) -> Self {
        Self { state: seed as u32 }
    }

    /// Advances the state and returns it.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}

impl UniformSource for Lcg {
    fn next_uniform(&mut self) -> f64 {
        f64::from(self.next_u32()) / LCG_MODULUS
    }
}

/// Non-deterministic source backed by [`rand::rng`].
#[derive(Debug, Clone)]
pub struct ThreadSource {
    rng: ThreadRng,
}

impl ThreadSource {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for ThreadSource {
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// The generator owned by a single trial.
#[derive(Debug, Clone)]
pub enum TrialRng {
    Seeded(Lcg),
    Unseeded(ThreadSource),
}

impl TrialRng {
    /// Builds the generator for trial `trial_index`.
    ///
    /// Seeded runs derive the trial seed as `base_seed + trial_index`.
    pub fn for_trial(mode: SeedMode, trial_index: usize) -> Self {
        match mode {
            SeedMode::Seeded(base) => {
                Self::Seeded(Lcg::new(base.wrapping_add(trial_index as u64)))
            }
            SeedMode::Unseeded => Self::Unseeded(ThreadSource::new()),
        }
    }
}

impl UniformSource for TrialRng {
    fn next_uniform(&mut self) -> f64 {
        match self {
            Self::Seeded(lcg) => lcg.next_uniform(),
            Self::Unseeded(source) => source.next_uniform(),
        }
    }
}

/// Draws `count` values from `pool` with replacement.
pub fn resample_with_replacement<R: UniformSource>(
    pool: &[f64],
    count: usize,
    rng: &mut R,
) -> Vec<f64> {
    if pool.is_empty() {
        return Vec::new();
    }
    (0..count).map(|_| pool[rng.next_index(pool.len())]).collect()
}
