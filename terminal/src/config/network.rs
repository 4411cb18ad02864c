//! Supported networks, chain ids and quote endpoints.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::core::error::{AppError, Result};

/// Chain id for Ethereum mainnet
pub const ETHEREUM_CHAIN_ID: u64 = 1;
/// Chain id for Polygon PoS
pub const POLYGON_CHAIN_ID: u64 = 137;

const ETHEREUM_ENDPOINT: &str = "https://api.0x.org";
const POLYGON_ENDPOINT: &str = "https://polygon-api.matcha.0x.org";

/// One of the two hardcoded chains the swap view trades on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    #[default]
    Ethereum,
    Polygon,
}

impl Network {
    /// All networks, in selector order
    pub fn all() -> &'static [Network] {
        &[Network::Ethereum, Network::Polygon]
    }

    /// Lowercase identifier used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Ethereum => "ethereum",
            Network::Polygon => "polygon",
        }
    }

    /// Display name
    pub fn title(&self) -> &'static str {
        match self {
            Network::Ethereum => "Ethereum",
            Network::Polygon => "Polygon",
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Ethereum => ETHEREUM_CHAIN_ID,
            Network::Polygon => POLYGON_CHAIN_ID,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ethereum" | "mainnet" => Ok(Network::Ethereum),
            "polygon" => Ok(Network::Polygon),
            other => Err(AppError::UnsupportedNetwork(other.to_string())),
        }
    }
}

/// Chain id -> quote API base URL.
#[derive(Debug, Clone)]
pub struct EndpointTable {
    endpoints: HashMap<u64, String>,
}

impl Default for EndpointTable {
    fn default() -> Self {
        let mut endpoints = HashMap::new();
        endpoints.insert(ETHEREUM_CHAIN_ID, ETHEREUM_ENDPOINT.to_string());
        endpoints.insert(POLYGON_CHAIN_ID, POLYGON_ENDPOINT.to_string());
        Self { endpoints }
    }
}

impl EndpointTable {
    /// Table pointing every supported chain at one base URL (local proxy, tests).
    pub fn single(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let endpoints = Network::all()
            .iter()
            .map(|n| (n.chain_id(), base_url.clone()))
            .collect();
        Self { endpoints }
    }

    /// Base URL for a network, without trailing slash.
    pub fn endpoint(&self, network: Network) -> Result<&str> {
        self.endpoints
            .get(&network.chain_id())
            .map(|url| url.trim_end_matches('/'))
            .ok_or_else(|| AppError::UnsupportedNetwork(network.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parsing() {
        assert_eq!("ethereum".parse::<Network>().unwrap(), Network::Ethereum);
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Ethereum);
        assert_eq!("Polygon".parse::<Network>().unwrap(), Network::Polygon);
        assert!("solana".parse::<Network>().is_err());
    }

    #[test]
    fn test_chain_ids() {
        assert_eq!(Network::Ethereum.chain_id(), 1);
        assert_eq!(Network::Polygon.chain_id(), 137);
    }

    #[test]
    fn test_default_endpoints() {
        let table = EndpointTable::default();
        assert_eq!(table.endpoint(Network::Ethereum).unwrap(), "https://api.0x.org");
        assert_eq!(
            table.endpoint(Network::Polygon).unwrap(),
            "https://polygon-api.matcha.0x.org"
        );
    }

    #[test]
    fn test_single_endpoint_strips_trailing_slash() {
        let table = EndpointTable::single("http://127.0.0.1:8080/");
        assert_eq!(table.endpoint(Network::Polygon).unwrap(), "http://127.0.0.1:8080");
    }
}
