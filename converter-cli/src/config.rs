//! Validated runtime configuration.
//!
//! Values come from flags or their environment variables (see `Cli`);
//! this module only checks them.

use std::path::PathBuf;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
    pub log_file: PathBuf,
}

impl Config {
    pub fn new(api_url: String, timeout_secs: u64, log_file: PathBuf) -> anyhow::Result<Self> {
        let api_url = api_url.trim().to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            anyhow::bail!(
                "--api-url / RATES_API_URL must be an http:// or https:// URL, got {:?}",
                api_url
            );
        }

        if timeout_secs == 0 {
            anyhow::bail!("--timeout-secs / RATES_TIMEOUT_SECS must be greater than zero");
        }

        if log_file.as_os_str().is_empty() {
            anyhow::bail!("--log-file / CONVERTER_LOG_FILE must not be empty");
        }

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            log_file,
        })
    }
}
