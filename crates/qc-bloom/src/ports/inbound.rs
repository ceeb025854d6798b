//! Inbound Ports (Driving Ports)
//!
//! The API that callers use to interact with a membership filter.

/// Probabilistic membership filter API (Driving Port)
///
/// Contract:
/// - `find` never returns `false` for a key passed to `insert` (no false
///   negatives)
/// - `find` may return `true` for a key never inserted (false positive)
/// - `bits_set_count` never decreases and never exceeds `size`
pub trait MembershipFilter {
    /// Record `key` as a member. Always succeeds.
    fn insert(&mut self, key: &[u8]);

    /// `true` if `key` may have been inserted, `false` if it definitely was not
    fn find(&self, key: &[u8]) -> bool;

    /// Analytic false positive projection from the configured parameters
    fn estimated_false_positive_rate(&self) -> f64;

    /// Number of distinct bits currently set
    fn bits_set_count(&self) -> usize;

    /// Size of the bit array in bits
    fn size(&self) -> usize;
}
