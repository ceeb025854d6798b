//! Outbound Ports (Driven Ports)
//!
//! The Bloom filter depends on exactly one external capability: a keyed
//! hash function. It is injected so the filter never fixes a particular
//! algorithm.

/// Hash family provider (Driven Port)
///
/// One keyed hash function parameterised by `seed`. The filter calls it with
/// seeds `1..=d`, and each seed must behave as an independent, uniformly
/// distributed hash function over the key domain.
///
/// Implementations must be deterministic: the same `(key, seed)` always
/// yields the same value, with no hidden random state.
pub trait HashFamily {
    /// Hash `key` with the family member selected by `seed`
    fn hash(&self, key: &[u8], seed: u32) -> u64;
}

impl<H: HashFamily + ?Sized> HashFamily for &H {
    fn hash(&self, key: &[u8], seed: u32) -> u64 {
        (**self).hash(key, seed)
    }
}

impl<H: HashFamily + ?Sized> HashFamily for Box<H> {
    fn hash(&self, key: &[u8], seed: u32) -> u64 {
        (**self).hash(key, seed)
    }
}
