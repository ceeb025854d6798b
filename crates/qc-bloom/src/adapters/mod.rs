//! Adapters Layer (Driven Adapters)
//!
//! Concrete hash families implementing the `HashFamily` port.
//!
//! ## Adapters
//!
//! - `Murmur3Family` - MurmurHash3 x64-128, the default
//! - `SipHashFamily` - keyed SipHash-1-3

pub mod murmur;
pub mod siphash;

pub use murmur::Murmur3Family;
pub use siphash::SipHashFamily;
