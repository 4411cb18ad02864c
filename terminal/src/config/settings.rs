use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::network::EndpointTable;
use crate::core::error::{AppError, Result};

/// Quiet period before a typed amount turns into a quote request
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
/// HTTP timeout for quote requests
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const MAX_DEBOUNCE_MS: u64 = 10_000;
const DEFAULT_SETTINGS_PATH: &str = "./swap-terminal-settings.json";

/// Runtime configuration for the swap terminal.
#[derive(Clone, Debug)]
pub struct SwapConfig {
    pub endpoints: EndpointTable,
    /// Sent as `0x-api-key` when present
    pub api_key: Option<String>,
    pub debounce: Duration,
    pub http_timeout: Duration,
    pub settings_path: PathBuf,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            endpoints: EndpointTable::default(),
            api_key: None,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
        }
    }
}

impl SwapConfig {
    pub fn from_env() -> Result<Self> {
        let endpoints = match env::var("SWAP_QUOTE_API_URL") {
            Ok(url) if !url.trim().is_empty() => EndpointTable::single(url.trim()),
            _ => EndpointTable::default(),
        };

        let api_key = env::var("SWAP_API_KEY").ok().filter(|k| !k.trim().is_empty());

        let debounce_ms = env::var("SWAP_QUOTE_DEBOUNCE_MS")
            .unwrap_or_else(|_| DEFAULT_DEBOUNCE_MS.to_string())
            .parse::<u64>()
            .map_err(|_| AppError::Config("SWAP_QUOTE_DEBOUNCE_MS must be a valid number".to_string()))?;

        let timeout_secs = env::var("SWAP_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_HTTP_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| AppError::Config("SWAP_HTTP_TIMEOUT_SECS must be a valid number".to_string()))?;

        let settings_path = env::var("SWAP_SETTINGS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH));

        Ok(Self {
            endpoints,
            api_key,
            debounce: Duration::from_millis(debounce_ms),
            http_timeout: Duration::from_secs(timeout_secs),
            settings_path,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.http_timeout.is_zero() {
            return Err(AppError::Config("SWAP_HTTP_TIMEOUT_SECS must be at least 1".to_string()));
        }

        if self.debounce > Duration::from_millis(MAX_DEBOUNCE_MS) {
            return Err(AppError::Config(format!(
                "SWAP_QUOTE_DEBOUNCE_MS must be at most {}",
                MAX_DEBOUNCE_MS
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SwapConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.debounce, Duration::from_millis(500));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = SwapConfig { http_timeout: Duration::ZERO, ..SwapConfig::default() };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_long_debounce() {
        let config = SwapConfig { debounce: Duration::from_secs(11), ..SwapConfig::default() };
        assert!(config.validate().is_err());
    }
}
