//! A single user-triggered conversion request.

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// What the user asked for: an amount as typed and two currency codes.
///
/// Codes are forwarded to the rate service as given. The amount keeps the
/// spelling the user typed so it can be echoed back in the display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: String,
    pub source: String,
    pub target: String,
}

impl ConversionRequest {
    pub fn new(
        amount: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into().trim().to_string(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Parses the amount as a finite floating-point number.
    pub fn numeric_amount(&self) -> Result<f64, ConversionError> {
        let value: f64 = self
            .amount
            .parse()
            .map_err(|e: std::num::ParseFloatError| ConversionError::InvalidAmount {
                amount: self.amount.clone(),
                reason: e.to_string(),
            })?;

        if !value.is_finite() {
            return Err(ConversionError::InvalidAmount {
                amount: self.amount.clone(),
                reason: "amount must be a finite number".into(),
            });
        }

        Ok(value)
    }
}
