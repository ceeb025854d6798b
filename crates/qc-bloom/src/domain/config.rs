//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use qc_bloom::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .num_keys(10_000)
//!     .num_hashes(3)
//!     .max_false_positive(0.01)
//!     .build()
//!     .expect("Valid config");
//!
//! assert_eq!(config.num_hashes(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Default expected number of keys
pub const DEFAULT_NUM_KEYS: usize = 100_000;

/// Default number of hash functions per key
pub const DEFAULT_NUM_HASHES: u32 = 4;

/// Default target false positive rate
pub const DEFAULT_MAX_FALSE_POSITIVE: f64 = 0.05;

/// Largest bit array a configuration may plan (256 MiB of bits)
pub const DEFAULT_MAX_SIZE_BITS: usize = 1 << 31;

/// Bloom filter configuration
///
/// Immutable once built. A filter copies the configuration at construction
/// and never exposes a way to change it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Expected key population (n)
    num_keys: usize,
    /// Hash functions per key (d)
    num_hashes: u32,
    /// Target false positive probability (p)
    max_false_positive: f64,
    /// Upper bound on the planned bit array size
    #[serde(default = "default_max_size_bits")]
    max_size_bits: usize,
}

fn default_max_size_bits() -> usize {
    DEFAULT_MAX_SIZE_BITS
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            num_keys: DEFAULT_NUM_KEYS,
            num_hashes: DEFAULT_NUM_HASHES,
            max_false_positive: DEFAULT_MAX_FALSE_POSITIVE,
            max_size_bits: DEFAULT_MAX_SIZE_BITS,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(
        num_keys: usize,
        num_hashes: u32,
        max_false_positive: f64,
    ) -> Result<Self, FilterError> {
        let config = Self {
            num_keys,
            num_hashes,
            max_false_positive,
            max_size_bits: DEFAULT_MAX_SIZE_BITS,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the parameter preconditions
    ///
    /// Does not plan the bit array; the size checks happen when a filter
    /// is built from this configuration.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.num_keys == 0 {
            return Err(FilterError::invalid_configuration(
                "num_keys must be greater than 0",
            ));
        }

        if self.num_hashes == 0 {
            return Err(FilterError::invalid_configuration(
                "num_hashes must be at least 1",
            ));
        }

        // Written as a negated range check so NaN is rejected too
        if !(self.max_false_positive > 0.0 && self.max_false_positive < 1.0) {
            return Err(FilterError::invalid_configuration(format!(
                "max_false_positive must be strictly between 0 and 1, got {}",
                self.max_false_positive
            )));
        }

        if self.max_size_bits == 0 {
            return Err(FilterError::invalid_configuration(
                "max_size_bits cannot be 0",
            ));
        }

        Ok(())
    }

    /// Expected key population (n)
    pub fn num_keys(&self) -> usize {
        self.num_keys
    }

    /// Hash functions per key (d)
    pub fn num_hashes(&self) -> u32 {
        self.num_hashes
    }

    /// Target false positive probability (p)
    pub fn max_false_positive(&self) -> f64 {
        self.max_false_positive
    }

    /// Upper bound on the planned bit array size
    pub fn max_size_bits(&self) -> usize {
        self.max_size_bits
    }
}

/// Builder for FilterConfig with validation
///
/// Unset fields fall back to the `FilterConfig::default()` values.
#[derive(Default)]
pub struct FilterConfigBuilder {
    num_keys: Option<usize>,
    num_hashes: Option<u32>,
    max_false_positive: Option<f64>,
    max_size_bits: Option<usize>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set expected number of keys
    pub fn num_keys(mut self, num_keys: usize) -> Self {
        self.num_keys = Some(num_keys);
        self
    }

    /// Set number of hash functions per key
    pub fn num_hashes(mut self, num_hashes: u32) -> Self {
        self.num_hashes = Some(num_hashes);
        self
    }

    /// Set target false positive rate (must be strictly between 0 and 1)
    pub fn max_false_positive(mut self, fpr: f64) -> Self {
        self.max_false_positive = Some(fpr);
        self
    }

    /// Set the cap on the planned bit array size
    pub fn max_size_bits(mut self, bits: usize) -> Self {
        self.max_size_bits = Some(bits);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            num_keys: self.num_keys.unwrap_or(defaults.num_keys),
            num_hashes: self.num_hashes.unwrap_or(defaults.num_hashes),
            max_false_positive: self
                .max_false_positive
                .unwrap_or(defaults.max_false_positive),
            max_size_bits: self.max_size_bits.unwrap_or(defaults.max_size_bits),
        };

        config.validate()?;
        Ok(config)
    }
}
