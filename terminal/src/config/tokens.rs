//! Static token registry.
//!
//! Maps a lowercase token identifier (what the quote API accepts as
//! `sellToken` / `buyToken`) to its decimal precision and, when known, its
//! canonical mainnet contract address.

use std::collections::HashMap;

use crate::core::error::{AppError, Result};

/// Precision and optional on-chain identity of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDetail {
    pub decimals: u32,
    pub chain_id: Option<u64>,
    pub address: Option<String>,
}

impl TokenDetail {
    fn plain(decimals: u32) -> Self {
        Self { decimals, chain_id: None, address: None }
    }

    fn mainnet(decimals: u32, address: &str) -> Self {
        Self {
            decimals,
            chain_id: Some(super::network::ETHEREUM_CHAIN_ID),
            address: Some(address.to_string()),
        }
    }
}

/// Token identifiers the swap view offers and accepts from deep links
const SUPPORTED_TOKENS: [&str; 4] = ["usdc", "dai", "matic", "weth"];

/// Read-only token table, built once and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: HashMap<String, TokenDetail>,
    supported: Vec<String>,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        let mut tokens = HashMap::new();
        tokens.insert("zrx".to_string(), TokenDetail::mainnet(18, "0xE41d2489571d322189246DaFA5ebDe1F4699F498"));
        tokens.insert("dai".to_string(), TokenDetail::mainnet(18, "0x6B175474E89094C44Da98b954EedeAC495271d0F"));
        tokens.insert("usdc".to_string(), TokenDetail::mainnet(6, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"));
        tokens.insert("weth".to_string(), TokenDetail::mainnet(18, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"));
        tokens.insert("matic".to_string(), TokenDetail::mainnet(18, "0x7D1AfA7B718fb893dB30A3aBc0Cfc608AaCfeBB0"));
        for symbol in ["1inch", "bal", "bnt", "crv", "comp", "ens", "link", "aave", "sushi", "sos", "snx", "uni"] {
            tokens.insert(symbol.to_string(), TokenDetail::plain(18));
        }
        tokens.insert("usdt".to_string(), TokenDetail::plain(6));
        tokens.insert("wbtc".to_string(), TokenDetail::plain(8));

        Self {
            tokens,
            supported: SUPPORTED_TOKENS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TokenRegistry {
    /// Build a registry from explicit entries. Every supported id must be present.
    pub fn new(tokens: HashMap<String, TokenDetail>, supported: Vec<String>) -> Result<Self> {
        if let Some(missing) = supported.iter().find(|id| !tokens.contains_key(*id)) {
            return Err(AppError::Config(format!(
                "supported token '{}' has no registry entry",
                missing
            )));
        }
        Ok(Self { tokens, supported })
    }

    pub fn get(&self, id: &str) -> Option<&TokenDetail> {
        self.tokens.get(id)
    }

    /// Decimal precision, or `UnknownToken`.
    pub fn decimals(&self, id: &str) -> Result<u32> {
        self.get(id)
            .map(|t| t.decimals)
            .ok_or_else(|| AppError::UnknownToken(id.to_string()))
    }

    /// Whether the id is in the selectable allowlist.
    pub fn is_supported(&self, id: &str) -> bool {
        self.supported.iter().any(|s| s == id)
    }

    /// Selectable ids, in selector order.
    pub fn supported(&self) -> &[String] {
        &self.supported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_decimals() {
        let registry = TokenRegistry::default();
        assert_eq!(registry.decimals("usdc").unwrap(), 6);
        assert_eq!(registry.decimals("weth").unwrap(), 18);
        assert_eq!(registry.decimals("wbtc").unwrap(), 8);
        assert!(matches!(registry.decimals("doge"), Err(AppError::UnknownToken(_))));
    }

    #[test]
    fn test_supported_allowlist() {
        let registry = TokenRegistry::default();
        assert!(registry.is_supported("dai"));
        assert!(!registry.is_supported("uni"));
        assert_eq!(registry.supported().len(), 4);
    }

    #[test]
    fn test_new_rejects_supported_without_entry() {
        let tokens = HashMap::from([("usdc".to_string(), TokenDetail::plain(6))]);
        let result = TokenRegistry::new(tokens, vec!["usdc".into(), "weth".into()]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
