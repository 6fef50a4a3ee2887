//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The conversion service depends on these traits, not concrete implementations.

mod audit;
mod rates;

pub use audit::AuditLog;
pub use rates::RateProvider;
