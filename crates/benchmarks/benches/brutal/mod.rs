//! # Brutal Modular Benchmarks
//!
//! Benchmarks that push the Bloom filter with large populations and
//! adversarial key patterns.
//!
//! ## Structure
//!
//! - `bloom_filter` - sizing, insert/find O(d), false positive validation
pub mod bloom_filter;
