//! Hash index generation for the Bloom filter
//!
//! Maps a key and a seed index in `1..=d` onto a bit position in `[0, N)`.
//! Each seed index selects an independent member of the injected hash
//! family; the wide hash is reduced with `mod N`.

use crate::ports::HashFamily;

/// Bit position for `key` under family member `seed_index`
///
/// Deterministic for a given `(key, seed_index, size_bits)` and family.
/// `size_bits` must be non-zero.
#[inline]
pub fn bit_position<H: HashFamily + ?Sized>(
    family: &H,
    key: &[u8],
    seed_index: u32,
    size_bits: usize,
) -> usize {
    (family.hash(key, seed_index) % size_bits as u64) as usize
}

/// All `num_hashes` bit positions for `key`, in seed order `1..=num_hashes`
///
/// Lazy, so callers that stop at the first zero bit skip the remaining
/// hash computations.
pub fn bit_positions<'a, H: HashFamily + ?Sized>(
    family: &'a H,
    key: &'a [u8],
    num_hashes: u32,
    size_bits: usize,
) -> impl Iterator<Item = usize> + 'a {
    (1..=num_hashes).map(move |seed_index| bit_position(family, key, seed_index, size_bits))
}
