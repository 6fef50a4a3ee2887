//! Domain models for the currency converter.

pub mod log_entry;
pub mod outcome;
pub mod rates;
pub mod request;

pub use log_entry::LogEntry;
pub use outcome::{Conversion, ConversionOutcome, ConversionResult, FailureKind};
pub use rates::RateTable;
pub use request::ConversionRequest;
