//! Rate table as returned by the rate service for one base currency.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Latest rates relative to `base`.
///
/// Only `rates` is required; the service sends more metadata than this and
/// anything unknown is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        Self {
            base: Some(base.into()),
            date: None,
            rates,
        }
    }

    /// How many units of `code` one unit of the base currency buys.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
