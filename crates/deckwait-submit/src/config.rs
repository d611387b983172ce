//! Submission configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default spreadsheet-backed storage endpoint
pub const DEFAULT_ENDPOINT: &str = "https://sheetdb.io/api/v1/cardgame-waitlist";

/// Seconds the form stays in `Submitted` before reverting to `Idle`
pub const DEFAULT_RESET_DELAY_SECS: u64 = 3;

/// Workflow configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Storage endpoint URL
    pub endpoint_url: String,
    /// Delay before a settled form clears and reverts, in seconds
    pub reset_delay_secs: u64,
}

impl SubmitConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With endpoint URL
    #[inline]
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_url = endpoint.into();
        self
    }

    /// With reset delay in seconds
    #[inline]
    #[must_use]
    pub fn with_reset_delay_secs(mut self, secs: u64) -> Self {
        self.reset_delay_secs = secs;
        self
    }

    /// Reset delay as a [`Duration`]
    #[inline]
    #[must_use]
    pub fn reset_delay(&self) -> Duration {
        Duration::from_secs(self.reset_delay_secs)
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
            reset_delay_secs: DEFAULT_RESET_DELAY_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SubmitConfig::new();
        assert_eq!(config.endpoint_url, DEFAULT_ENDPOINT);
        assert_eq!(config.reset_delay(), Duration::from_secs(3));
    }

    #[test]
    fn builder_overrides() {
        let config = SubmitConfig::new()
            .with_endpoint("http://localhost:9999/rows")
            .with_reset_delay_secs(0);
        assert_eq!(config.endpoint_url, "http://localhost:9999/rows");
        assert_eq!(config.reset_delay(), Duration::ZERO);
    }
}
