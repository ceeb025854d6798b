//! SipHash-1-3 hash family
//!
//! Keyed alternative to MurmurHash3. The family key and the seed form the
//! two 64-bit SipHash keys, so different seeds are independent PRF instances.

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::ports::HashFamily;

/// SipHash-1-3 keyed by `(key, seed)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SipHashFamily {
    key: u64,
}

impl SipHashFamily {
    /// Family with key 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Family with a caller-chosen 64-bit key
    pub fn with_key(key: u64) -> Self {
        Self { key }
    }
}

impl HashFamily for SipHashFamily {
    fn hash(&self, key: &[u8], seed: u32) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(self.key, seed as u64);
        hasher.write(key);
        hasher.finish()
    }
}
