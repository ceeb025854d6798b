//! MurmurHash3 hash family
//!
//! Default family used by `BloomFilter`. Each seed selects a different
//! MurmurHash3 x64-128 instance; the lower 64 bits of the digest are kept.

use std::io::Cursor;

use crate::ports::HashFamily;

/// MurmurHash3 x64-128 keyed by `seed + tweak`
///
/// The tweak shifts the whole family, so two filters with different tweaks
/// place the same key on unrelated bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Murmur3Family {
    tweak: u32,
}

impl Murmur3Family {
    /// Family with tweak 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Family shifted by `tweak`
    pub fn with_tweak(tweak: u32) -> Self {
        Self { tweak }
    }

    /// The tweak value
    pub fn tweak(&self) -> u32 {
        self.tweak
    }
}

impl HashFamily for Murmur3Family {
    fn hash(&self, key: &[u8], seed: u32) -> u64 {
        let combined_seed = seed.wrapping_add(self.tweak);
        let mut cursor = Cursor::new(key);

        // Reading from an in-memory slice cannot fail
        let hash = murmur3::murmur3_x64_128(&mut cursor, combined_seed).unwrap_or(0);
        hash as u64
    }
}
