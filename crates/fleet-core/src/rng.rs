//! Injectable random-number source.
//!
//! # Determinism strategy
//!
//! Nothing in this workspace reaches for a process-global RNG.  Every call
//! path that needs randomness (route jitter, battery drain, speed sampling)
//! owns a `FleetRng` instance: request handlers create one per request, the
//! telemetry simulator holds one for its lifetime.  This means:
//!
//! - No shared mutable seed contended across concurrent requests.
//! - Tests construct a `FleetRng` from a fixed seed and get reproducible
//!   trajectories.
//! - All RNG calls are local to the owning thread; no synchronisation needed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A small, fast RNG owned by exactly one call path.
///
/// The type is `!Sync` to prevent accidental sharing across threads — clone
/// the seed, not the generator.
pub struct FleetRng(SmallRng);

impl FleetRng {
    /// Seed deterministically.  The same seed always produces the same
    /// sequence; use this in tests and reproducible simulations.
    pub fn new(seed: u64) -> Self {
        FleetRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.  Use this on request paths where
    /// reproducibility is not wanted.
    pub fn from_entropy() -> Self {
        FleetRng(SmallRng::from_entropy())
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
