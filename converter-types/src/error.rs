//! Error types for the currency converter.

use crate::domain::FailureKind;

/// Rate service failures.
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rate service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed rate response: {0}")]
    Malformed(String),
}

impl RateError {
    /// True for failures of the request itself, as opposed to a response
    /// that arrived but could not be understood.
    pub fn is_transport(&self) -> bool {
        !matches!(self, RateError::Malformed(_))
    }
}

/// Everything that can stop a single conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Rates(#[from] RateError),

    #[error("Invalid amount {amount:?}: {reason}")]
    InvalidAmount { amount: String, reason: String },

    #[error("No rate for {currency} in the response")]
    MissingRate { currency: String },
}

impl ConversionError {
    /// Maps the error to the message category shown to the user.
    pub fn failure(&self) -> FailureKind {
        match self {
            ConversionError::Rates(e) if e.is_transport() => FailureKind::RatesUnavailable,
            _ => FailureKind::ConversionFailed,
        }
    }
}

/// Audit log write failures.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Audit log IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_map_to_rates_unavailable() {
        let errors = [
            RateError::Timeout("deadline elapsed".into()),
            RateError::Transport("connection refused".into()),
            RateError::Status {
                status: 404,
                message: "unsupported-code".into(),
            },
        ];
        for e in errors {
            assert_eq!(
                ConversionError::from(e).failure(),
                FailureKind::RatesUnavailable
            );
        }
    }

    #[test]
    fn test_data_errors_map_to_conversion_failed() {
        let malformed = ConversionError::from(RateError::Malformed("expected value".into()));
        assert_eq!(malformed.failure(), FailureKind::ConversionFailed);

        let missing = ConversionError::MissingRate {
            currency: "XYZ".into(),
        };
        assert_eq!(missing.failure(), FailureKind::ConversionFailed);

        let amount = ConversionError::InvalidAmount {
            amount: "abc".into(),
            reason: "invalid float literal".into(),
        };
        assert_eq!(amount.failure(), FailureKind::ConversionFailed);
    }

    #[test]
    fn test_error_text_carries_detail() {
        let e = ConversionError::from(RateError::Transport("tcp connect error".into()));
        assert_eq!(e.to_string(), "Transport error: tcp connect error");
        let e = ConversionError::MissingRate {
            currency: "XYZ".into(),
        };
        assert_eq!(e.to_string(), "No rate for XYZ in the response");
    }
}
