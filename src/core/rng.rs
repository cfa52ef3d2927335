//! Deterministic random number generation for the games.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical targets and throws
//! - **Signed ranges**: Closed ranges with negative bounds are supported
//! - **Degenerate ranges**: `min == max` returns `min` without drawing
//!
//! ```
//! use parlor_games::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.gen_in_range(-5, 5).unwrap();
//! assert!((-5..=5).contains(&roll));
//!
//! // Single-element ranges never touch the generator
//! assert_eq!(rng.gen_in_range(7, 7).unwrap(), 7);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};

/// Seedable RNG shared by both games.
///
/// Uses ChaCha8 so that a seed passed on the command line reproduces a whole
/// session, replays included.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the OS.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in the closed range `[min, max]`.
    ///
    /// The lower bound is shifted to zero, an unsigned magnitude in
    /// `[0, max - min]` is drawn, and the result is shifted back.
    ///
    /// Returns `Error::EmptyRange` if `min > max`.
    pub fn gen_in_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(Error::EmptyRange { min, max });
        }
        if min == max {
            return Ok(min);
        }

        let span = max.abs_diff(min);
        let magnitude = self.inner.gen_range(0..=span);

        // min + magnitude <= max, so the shift back never overflows
        Ok(min.wrapping_add_unsigned(magnitude))
    }

    /// Generate a random usize in the given half-open range.
    ///
    /// Panics if the range is empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
