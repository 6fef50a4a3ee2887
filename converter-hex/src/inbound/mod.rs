//! Inbound adapters.
//!
//! Everything here turns user input into calls on `ConversionService`.

pub mod session;

pub use session::{Command, ConversionSession, SessionSummary, USAGE};
