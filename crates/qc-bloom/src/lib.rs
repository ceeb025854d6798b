//! # QC Bloom
//!
//! Probabilistic set membership using a Bloom filter sized from a target key
//! population, a hash function count and a false positive rate.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure business logic, no I/O
//!   - `BloomFilter`: Core probabilistic data structure
//!   - `FilterConfig`: Configuration with validation
//!   - `FilterConfigBuilder`: Fluent builder for configuration
//!   - `bits_needed`: Bit array sizing
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipFilter`: Driving port (inbound API)
//!   - `HashFamily`: Driven port (injected hash function)
//!
//! - **Adapters Layer** (`adapters/`): Hash family implementations
//!   - `Murmur3Family`: MurmurHash3 x64-128 (default)
//!   - `SipHashFamily`: keyed SipHash-1-3
//!
//! ## Sizing
//!
//! With n keys, d hash functions and target false positive rate p:
//!
//! - phi = 1 - p^(1/d), the proportion of bits expected to stay zero
//! - N = floor(d / (1 - phi^(1/n)))
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: No false negatives - if inserted, find() MUST return true
//! - **INVARIANT-2**: bits_set_count() never decreases and never exceeds size()
//!
//! ## Concurrency
//!
//! A filter is a plain value with no interior mutability. Share it across
//! threads behind a lock (`RwLock` allows concurrent `find` calls).
//!
//! ## Usage Example
//!
//! ```
//! use qc_bloom::{BloomFilter, FilterError};
//!
//! let mut filter = BloomFilter::new(100_000, 4, 0.05)?;
//! assert_eq!(filter.size(), 624_699);
//!
//! filter.insert(b"aardvark");
//! assert!(filter.find(b"aardvark"));
//! assert!(filter.bits_set_count() <= 4);
//! # Ok::<(), FilterError>(())
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use adapters::{Murmur3Family, SipHashFamily};
pub use domain::{bits_needed, BloomFilter, FilterConfig, FilterConfigBuilder};
pub use error::FilterError;
pub use ports::{HashFamily, MembershipFilter};
