//! # Converter Types
//!
//! Domain types and port traits for the currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! the fixed user-facing messages, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Requests, rate tables, outcomes, log entries
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Rate service, conversion and audit log error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Conversion, ConversionOutcome, ConversionRequest, ConversionResult, FailureKind, LogEntry,
    RateTable,
};
pub use error::{AuditError, ConversionError, RateError};
pub use ports::{AuditLog, RateProvider};
