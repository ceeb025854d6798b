//! Dense bit array backing the Bloom filter
//!
//! Bits are packed 64 per `u64` word. The store keeps its own count of bits
//! that are 1, so occupancy is O(1) and never requires a scan.
//!
//! INVARIANTS:
//! - `len` never changes after construction
//! - `ones` equals the number of distinct positions set to 1, and `ones <= len`

const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-length, bit-packed array with a running popcount
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BitStore {
    words: Vec<u64>,
    len: usize,
    ones: usize,
}

impl BitStore {
    /// Allocate `len` bits, all zero
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
            ones: 0,
        }
    }

    /// Read the bit at `index`
    ///
    /// # Panics
    /// Panics if `index >= len`. An out-of-range position means the hash
    /// reduction is broken, which is not recoverable.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        self.words[word] & mask != 0
    }

    /// Set the bit at `index` to 1
    ///
    /// Returns `true` only if the bit was 0 before the call. Setting a bit
    /// that is already 1 leaves the store untouched.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub(crate) fn set(&mut self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        let slot = &mut self.words[word];
        if *slot & mask != 0 {
            return false;
        }
        *slot |= mask;
        self.ones += 1;
        true
    }

    /// Number of bits currently 1
    #[inline]
    pub(crate) fn count_ones(&self) -> usize {
        self.ones
    }

    /// Number of addressable bits
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn locate(&self, index: usize) -> (usize, u64) {
        assert!(
            index < self.len,
            "IndexOutOfRange: bit index {} outside store of {} bits",
            index,
            self.len
        );
        (index / WORD_BITS, 1u64 << (index % WORD_BITS))
    }
}
