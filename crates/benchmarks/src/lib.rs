//! Benchmark utilities for the Bloom filter
pub mod utils {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// `count` random 16-byte keys from a fixed seed
    pub fn generate_keys(count: usize, seed: u64) -> Vec<[u8; 16]> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let mut key = [0u8; 16];
                rng.fill(&mut key);
                key
            })
            .collect()
    }

    /// `count` keys sharing a 12-byte prefix and differing only in a counter
    pub fn generate_prefixed_keys(count: usize) -> Vec<Vec<u8>> {
        let prefix = [0xAB_u8; 12];
        (0..count)
            .map(|i| {
                let mut key = prefix.to_vec();
                key.extend_from_slice(&(i as u32).to_le_bytes());
                key
            })
            .collect()
    }
}
