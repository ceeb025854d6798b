//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Dense bit store
//! - Hash index generation
//! - Sizing and false positive formulas
//! - Configuration
//! - Core Bloom filter
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

mod bit_store;
pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{
    FilterConfig, FilterConfigBuilder, DEFAULT_MAX_FALSE_POSITIVE, DEFAULT_MAX_SIZE_BITS,
    DEFAULT_NUM_HASHES, DEFAULT_NUM_KEYS,
};
pub use parameters::{bits_needed, projected_fpr};
