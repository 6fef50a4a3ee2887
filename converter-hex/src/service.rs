//! Conversion Application Service
//!
//! Orchestrates one conversion through the rate provider and audit log ports.
//! Contains NO infrastructure logic.

use tokio::sync::Mutex;
use tracing::Instrument;
use uuid::Uuid;

use converter_types::{
    AuditLog, Conversion, ConversionError, ConversionOutcome, ConversionRequest, FailureKind,
    LogEntry, RateProvider,
};

/// Application service for currency conversion.
///
/// Every call ends in exactly one audit line and one of two outcomes; no
/// error escapes. Calls are serialized through the trigger lock.
pub struct ConversionService<P: RateProvider, L: AuditLog> {
    provider: P,
    log: L,
    trigger: Mutex<()>,
}

impl<P: RateProvider, L: AuditLog> ConversionService<P, L> {
    pub fn new(provider: P, log: L) -> Self {
        Self {
            provider,
            log,
            trigger: Mutex::new(()),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// True while a conversion is outstanding.
    pub fn is_busy(&self) -> bool {
        self.trigger.try_lock().is_err()
    }

    /// Converts `amount` from `source` to `target`, waiting for any
    /// outstanding conversion to finish first.
    pub async fn convert(&self, amount: &str, source: &str, target: &str) -> ConversionOutcome {
        self.convert_request(ConversionRequest::new(amount, source, target))
            .await
    }

    pub async fn convert_request(&self, req: ConversionRequest) -> ConversionOutcome {
        let _trigger = self.trigger.lock().await;
        self.run(req).await
    }

    /// Like [`convert`](Self::convert), but returns `None` without doing
    /// anything if a conversion is already in flight.
    pub async fn try_convert(
        &self,
        amount: &str,
        source: &str,
        target: &str,
    ) -> Option<ConversionOutcome> {
        let _trigger = self.trigger.try_lock().ok()?;
        Some(self.run(ConversionRequest::new(amount, source, target)).await)
    }

    async fn run(&self, req: ConversionRequest) -> ConversionOutcome {
        let span = tracing::info_span!(
            "conversion",
            request_id = %Uuid::new_v4(),
            source = %req.source,
            target = %req.target,
        );

        async move {
            match self.attempt(req).await {
                Ok(conversion) => {
                    tracing::info!(
                        rate = conversion.rate,
                        converted = conversion.converted,
                        "conversion succeeded"
                    );
                    self.record(LogEntry::info(conversion.audit_message()))
                        .await;
                    ConversionOutcome::Converted(conversion)
                }
                Err(e) => {
                    let kind = e.failure();
                    tracing::warn!(error = %e, ?kind, "conversion failed");
                    let detail = match kind {
                        FailureKind::RatesUnavailable => format!("Request failed: {}", e),
                        FailureKind::ConversionFailed => format!("Conversion failed: {}", e),
                    };
                    self.record(LogEntry::error(detail)).await;
                    ConversionOutcome::Failed(kind)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn attempt(&self, req: ConversionRequest) -> Result<Conversion, ConversionError> {
        let table = self.provider.latest(&req.source).await?;

        let rate = table
            .rate(&req.target)
            .ok_or_else(|| ConversionError::MissingRate {
                currency: req.target.clone(),
            })?;

        let amount = req.numeric_amount()?;

        Ok(Conversion::new(req, amount, rate))
    }

    async fn record(&self, entry: LogEntry) {
        if let Err(e) = self.log.append(&entry).await {
            tracing::warn!(error = %e, "failed to write audit line");
        }
    }
}
