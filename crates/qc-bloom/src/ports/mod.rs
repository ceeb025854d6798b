//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for callers
//! - Driven Ports (outbound) - the injected hash family

pub mod inbound;
pub mod outbound;

pub use inbound::MembershipFilter;
pub use outbound::HashFamily;
