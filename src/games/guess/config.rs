//! Guessing game configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Bounds of the secret number, inclusive on both ends.
///
/// ```
/// use parlor_games::GuessConfig;
///
/// let config = GuessConfig::new().with_bounds(-10, 10);
/// assert!(config.validate().is_ok());
/// assert!(GuessConfig::new().with_bounds(5, 1).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessConfig {
    /// Smallest possible target.
    pub min: i64,

    /// Largest possible target.
    pub max: i64,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

impl GuessConfig {
    pub const DEFAULT_MIN: i64 = 1;
    pub const DEFAULT_MAX: i64 = 100;

    /// Create a configuration with the default 1-100 range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both bounds.
    #[must_use]
    pub fn with_bounds(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(Error::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}
