//! # Converter Hex
//!
//! Conversion service and inbound trigger for the currency converter.
//!
//! ## Architecture
//!
//! - `service/` - The conversion handler (fetch, look up, multiply, log)
//! - `inbound/` - Line-driven trigger that feeds user input to the service
//!
//! The service is generic over `P: RateProvider` and `L: AuditLog`, so the
//! HTTP client and the log file can be swapped for test doubles.

pub mod inbound;
pub mod service;


pub use service::ConversionService;
