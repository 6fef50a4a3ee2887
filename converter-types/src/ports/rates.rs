//! Exchange rate provider port.
//!
//! Implementations can be HTTP clients, fixed tables for tests, etc.

use crate::domain::RateTable;
use crate::error::RateError;

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the latest rates with `base` as the base currency.
    ///
    /// `base` is forwarded unvalidated; unknown codes surface as a
    /// `RateError` from the service.
    async fn latest(&self, base: &str) -> Result<RateTable, RateError>;
}
