//! Bloom filter sizing and false positive projections
//!
//! Notation: n = expected keys, d = hash functions, N = bits, p = false
//! positive rate, phi = proportion of bits still zero.
//!
//! Formulas:
//! - p   = (1 - phi)^d         -- so phi = 1 - p^(1/d)
//! - phi = (1 - d/N)^n         -- so N = d / (1 - phi^(1/n))

/// Expected proportion of zero bits that yields false positive rate `p`
/// with `d` hash functions
///
/// Formula: phi = 1 - p^(1/d)
pub fn zero_bit_proportion(max_false_positive: f64, num_hashes: u32) -> f64 {
    1.0 - max_false_positive.powf(1.0 / num_hashes as f64)
}

/// Unfloored bit count for the given constraints
///
/// May be non-finite or below `num_hashes` for degenerate inputs; callers
/// decide what to reject.
pub fn raw_bits_needed(num_keys: usize, num_hashes: u32, max_false_positive: f64) -> f64 {
    let phi = zero_bit_proportion(max_false_positive, num_hashes);
    num_hashes as f64 / (1.0 - phi.powf(1.0 / num_keys as f64))
}

/// Number of bits needed to hold `num_keys` keys with `num_hashes` hash
/// functions at false positive rate `max_false_positive`
///
/// Pure function. Expects `num_keys > 0`, `num_hashes >= 1` and
/// `0 < max_false_positive < 1`; outside that range the result is
/// meaningless (a non-finite intermediate saturates the cast).
///
/// Formula: N = floor(d / (1 - phi^(1/n))), phi = 1 - p^(1/d)
pub fn bits_needed(num_keys: usize, num_hashes: u32, max_false_positive: f64) -> usize {
    raw_bits_needed(num_keys, num_hashes, max_false_positive) as usize
}

/// Projected false positive rate from static parameters
///
/// Runs the sizing relation in reverse: phi = (1 - d/N)^n, then
/// p = (1 - phi)^d.
pub fn projected_fpr(num_keys: usize, num_hashes: u32, size_bits: usize) -> f64 {
    if size_bits == 0 {
        return 1.0;
    }
    let phi = (1.0 - num_hashes as f64 / size_bits as f64).powf(num_keys as f64);
    (1.0 - phi).powf(num_hashes as f64)
}

/// Projected false positive rate from a measured number of set bits
///
/// Formula: p = (set/N)^d, i.e. (1 - phi_measured)^d
pub fn occupancy_fpr(bits_set: usize, num_hashes: u32, size_bits: usize) -> f64 {
    if size_bits == 0 {
        return 1.0;
    }
    let fill = bits_set as f64 / size_bits as f64;
    fill.powf(num_hashes as f64)
}
