//! Core Bloom Filter implementation
//!
//! INVARIANTS:
//! - INVARIANT-1: No false negatives - if inserted, find() MUST return true
//! - INVARIANT-2: bits_set_count() is non-decreasing and <= size()
//! - INVARIANT-3: size() is fixed at construction

use std::fmt;

use tracing::{debug, warn};

use super::bit_store::BitStore;
use super::config::FilterConfig;
use super::hash_functions::bit_positions;
use super::parameters::{bits_needed, occupancy_fpr, projected_fpr, raw_bits_needed};
use crate::adapters::Murmur3Family;
use crate::error::FilterError;
use crate::ports::{HashFamily, MembershipFilter};

/// Bloom filter for probabilistic membership testing
///
/// Sized once from `(num_keys, num_hashes, max_false_positive)`. False
/// positives are possible, false negatives are not. There is no removal, so
/// the filter degrades towards a higher false positive rate as it fills
/// rather than failing.
///
/// The hash family `H` is injected; `Murmur3Family` is used by default.
#[derive(Clone)]
pub struct BloomFilter<H = Murmur3Family> {
    /// Parameters the filter was built from
    config: FilterConfig,
    /// Size in bits (N)
    size_bits: usize,
    /// Bit array storing the filter state
    bits: BitStore,
    /// Hash family producing the d positions per key
    hasher: H,
}

impl BloomFilter<Murmur3Family> {
    /// Create a filter for `num_keys` keys using `num_hashes` hash functions
    /// and a target false positive rate of `max_false_positive`
    ///
    /// # Errors
    /// `FilterError::InvalidConfiguration` if `num_keys == 0`,
    /// `num_hashes == 0`, `max_false_positive` is not strictly inside (0, 1),
    /// or the planned bit array is unusable.
    ///
    /// # Example
    ///
    /// ```
    /// use qc_bloom::BloomFilter;
    ///
    /// let mut filter = BloomFilter::new(1_000, 3, 0.01)?;
    /// filter.insert(b"apple");
    ///
    /// assert!(filter.find(b"apple"));
    /// # Ok::<(), qc_bloom::FilterError>(())
    /// ```
    pub fn new(
        num_keys: usize,
        num_hashes: u32,
        max_false_positive: f64,
    ) -> Result<Self, FilterError> {
        Self::with_hasher(num_keys, num_hashes, max_false_positive, Murmur3Family::new())
    }

    /// Create a filter from a prepared configuration
    pub fn from_config(config: FilterConfig) -> Result<Self, FilterError> {
        Self::from_config_with_hasher(config, Murmur3Family::new())
    }
}

impl<H: HashFamily> BloomFilter<H> {
    /// Create a filter with an explicit hash family
    pub fn with_hasher(
        num_keys: usize,
        num_hashes: u32,
        max_false_positive: f64,
        hasher: H,
    ) -> Result<Self, FilterError> {
        let config =
            FilterConfig::new(num_keys, num_hashes, max_false_positive).map_err(rejected)?;
        Self::from_config_with_hasher(config, hasher)
    }

    /// Create a filter from a prepared configuration and hash family
    pub fn from_config_with_hasher(config: FilterConfig, hasher: H) -> Result<Self, FilterError> {
        let size_bits = plan_size(&config).map_err(rejected)?;

        debug!(
            num_keys = config.num_keys(),
            num_hashes = config.num_hashes(),
            max_false_positive = config.max_false_positive(),
            size_bits,
            "Sized Bloom filter"
        );

        Ok(Self {
            config,
            size_bits,
            bits: BitStore::new(size_bits),
            hasher,
        })
    }

    /// Insert a key into the filter
    ///
    /// After insertion, `find(key)` is guaranteed to return true.
    /// Inserting the same key again changes nothing.
    pub fn insert(&mut self, key: &[u8]) {
        for pos in bit_positions(&self.hasher, key, self.config.num_hashes(), self.size_bits) {
            self.bits.set(pos);
        }
    }

    /// Test if a key might be in the filter
    ///
    /// Returns:
    /// - `true` if the key might be in the set (could be false positive)
    /// - `false` if the key is definitely NOT in the set (never false negative)
    ///
    /// Stops at the first zero bit.
    pub fn find(&self, key: &[u8]) -> bool {
        bit_positions(&self.hasher, key, self.config.num_hashes(), self.size_bits)
            .all(|pos| self.bits.get(pos))
    }

    /// Projected false positive rate from the configured parameters
    ///
    /// Formula: phi = (1 - d/N)^n, FPR = (1 - phi)^d
    ///
    /// This is derived from (n, d, N) only and does not look at how many
    /// bits are actually set. See `occupancy_false_positive_rate` for the
    /// measured variant.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        projected_fpr(self.config.num_keys(), self.config.num_hashes(), self.size_bits)
    }

    /// Projected false positive rate from the measured bit occupancy
    ///
    /// Formula: FPR = (bits_set / N)^d
    pub fn occupancy_false_positive_rate(&self) -> f64 {
        occupancy_fpr(self.bits.count_ones(), self.config.num_hashes(), self.size_bits)
    }

    /// Fraction of bits currently set
    pub fn fill_ratio(&self) -> f64 {
        self.bits.count_ones() as f64 / self.size_bits as f64
    }

    /// Number of distinct bits currently set. O(1).
    pub fn bits_set_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Size of the bit array (N)
    pub fn size(&self) -> usize {
        debug_assert_eq!(self.size_bits, self.bits.len());
        self.size_bits
    }

    /// Number of hash functions (d)
    pub fn hash_count(&self) -> u32 {
        self.config.num_hashes()
    }

    /// Expected number of keys (n)
    pub fn expected_keys(&self) -> usize {
        self.config.num_keys()
    }

    /// Target false positive rate (p)
    pub fn target_fpr(&self) -> f64 {
        self.config.max_false_positive()
    }

    /// Configuration the filter was built from
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }
}

impl<H: HashFamily> MembershipFilter for BloomFilter<H> {
    fn insert(&mut self, key: &[u8]) {
        BloomFilter::insert(self, key);
    }

    fn find(&self, key: &[u8]) -> bool {
        BloomFilter::find(self, key)
    }

    fn estimated_false_positive_rate(&self) -> f64 {
        BloomFilter::estimated_false_positive_rate(self)
    }

    fn bits_set_count(&self) -> usize {
        BloomFilter::bits_set_count(self)
    }

    fn size(&self) -> usize {
        BloomFilter::size(self)
    }
}

impl<H> fmt::Debug for BloomFilter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("num_keys", &self.config.num_keys())
            .field("num_hashes", &self.config.num_hashes())
            .field("max_false_positive", &self.config.max_false_positive())
            .field("size_bits", &self.size_bits)
            .field("bits_set", &self.bits.count_ones())
            .finish_non_exhaustive()
    }
}

/// Validate `config` and compute N, rejecting sizes the filter cannot use
fn plan_size(config: &FilterConfig) -> Result<usize, FilterError> {
    config.validate()?;

    let (n, d, p) = (
        config.num_keys(),
        config.num_hashes(),
        config.max_false_positive(),
    );

    let raw = raw_bits_needed(n, d, p);
    if !raw.is_finite() {
        return Err(FilterError::invalid_configuration(format!(
            "bit array size for n={n}, d={d}, p={p} is not finite"
        )));
    }

    let size_bits = bits_needed(n, d, p);
    if size_bits == 0 || size_bits < d as usize {
        return Err(FilterError::invalid_configuration(format!(
            "bit array of {size_bits} bits cannot hold {d} hash positions"
        )));
    }

    if size_bits > config.max_size_bits() {
        return Err(FilterError::invalid_configuration(format!(
            "bit array of {size_bits} bits exceeds maximum {}",
            config.max_size_bits()
        )));
    }

    Ok(size_bits)
}

fn rejected(err: FilterError) -> FilterError {
    warn!(error = %err, "Rejected Bloom filter configuration");
    err
}
