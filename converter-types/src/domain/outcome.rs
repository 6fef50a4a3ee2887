//! Conversion outcomes and the fixed user-facing failure messages.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ConversionRequest;

/// The two failure categories a user can see.
///
/// Messages are fixed and carry no technical detail; the detail goes to the
/// audit log only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// Network failure, timeout or non-success status from the rate service.
    RatesUnavailable,
    /// Bad amount, missing rate, or an unexpected response shape.
    ConversionFailed,
}

impl FailureKind {
    pub fn message(&self) -> &'static str {
        match self {
            FailureKind::RatesUnavailable => {
                "Failed to fetch currency rates. Please try again later."
            }
            FailureKind::ConversionFailed => "An error occurred during conversion.",
        }
    }

    pub fn all() -> &'static [FailureKind] {
        &[FailureKind::RatesUnavailable, FailureKind::ConversionFailed]
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub request: ConversionRequest,
    pub rate: f64,
    pub converted: f64,
}

impl Conversion {
    pub fn new(request: ConversionRequest, amount: f64, rate: f64) -> Self {
        Self {
            request,
            rate,
            converted: amount * rate,
        }
    }

    /// `"100 USD = 45025.00 KZT"`
    pub fn display_text(&self) -> String {
        format!(
            "{} {} = {:.2} {}",
            self.request.amount, self.request.source, self.converted, self.request.target
        )
    }

    /// Message body for the audit line written on success.
    pub fn audit_message(&self) -> String {
        format!(
            "Converted {} {} to {:.2} {}",
            self.request.amount, self.request.source, self.converted, self.request.target
        )
    }
}

/// Terminal result of one conversion attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    Converted(Conversion),
    Failed(FailureKind),
}

impl ConversionOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, ConversionOutcome::Converted(_))
    }

    pub fn display_text(&self) -> String {
        match self {
            ConversionOutcome::Converted(conversion) => conversion.display_text(),
            ConversionOutcome::Failed(kind) => kind.message().to_string(),
        }
    }

    pub fn failure(&self) -> Option<FailureKind> {
        match self {
            ConversionOutcome::Converted(_) => None,
            ConversionOutcome::Failed(kind) => Some(*kind),
        }
    }
}

/// What the display collaborator gets: text plus a success flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub display_text: String,
    pub succeeded: bool,
}

impl From<ConversionOutcome> for ConversionResult {
    fn from(outcome: ConversionOutcome) -> Self {
        Self {
            display_text: outcome.display_text(),
            succeeded: outcome.succeeded(),
        }
    }
}
