//! Seeded uniform stream feeding the attachment phase.
//!
//! The stream is pinned so a `(vertex_count, block_size, seed)` triple maps to
//! one edge list on every platform: [`ChaCha8Rng`] seeded through
//! [`SeedableRng::seed_from_u64`], sampled as `f64` with
//! [`rand::distributions::Standard`]. Each draw carries 53 random mantissa
//! bits and lies in `[0, 1)`.

use rand::{Rng, SeedableRng, distributions::Standard};
use rand_chacha::ChaCha8Rng;

/// Deterministic source of uniform `f64` values in `[0, 1)`.
///
/// # Examples
/// ```
/// use brg_core::UniformStream;
///
/// let mut left = UniformStream::new(7);
/// let mut right = UniformStream::new(7);
/// let draw = left.next_unit();
/// assert!((0.0..1.0).contains(&draw));
/// assert_eq!(draw.to_bits(), right.next_unit().to_bits());
/// ```
#[derive(Debug, Clone)]
pub struct UniformStream {
    rng: ChaCha8Rng,
    draws: u64,
}

impl UniformStream {
    /// Seeds a new stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Returns the next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.draws = self.draws.wrapping_add(1);
        self.rng.sample(Standard)
    }

    /// Number of values drawn so far.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}
