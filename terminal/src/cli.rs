//! Command-line interface for the swap terminal

use clap::Parser;
use std::collections::HashMap;

use crate::config::{EndpointTable, SwapConfig};
use crate::utils::query::parse_query;

/// The swap terminal CLI
#[rustfmt::skip]
#[derive(Debug, Parser)]
#[clap(about = "Desktop token swap terminal")]
pub struct Cli {
    // -------------
    // | Deep link |
    // -------------

    /// Query string seeding the view, e.g. "network=polygon&sell=dai&buy=weth"
    #[clap(long)]
    pub link: Option<String>,
    /// Network to open on (ethereum, polygon); overrides the link
    #[clap(long)]
    pub network: Option<String>,
    /// Sell token; overrides the link
    #[clap(long)]
    pub sell: Option<String>,
    /// Buy token; overrides the link
    #[clap(long)]
    pub buy: Option<String>,

    // -------------
    // | Quote API |
    // -------------

    /// Base URL used for every network instead of the public endpoints
    #[clap(long, env = "SWAP_QUOTE_API_URL")]
    pub quote_api_url: Option<String>,

    // -----------
    // | Logging |
    // -----------

    /// Log filter used when RUST_LOG is unset, e.g. "swap_terminal=debug"
    #[clap(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// `network` / `sell` / `buy` parameters: the link first, then the discrete flags.
    pub fn query_params(&self) -> HashMap<String, String> {
        let mut params = self.link.as_deref().map(parse_query).unwrap_or_default();
        for (key, value) in [("network", &self.network), ("sell", &self.sell), ("buy", &self.buy)] {
            if let Some(value) = value {
                params.insert(key.to_string(), value.trim().to_ascii_lowercase());
            }
        }
        params
    }

    /// Apply flag overrides on top of the environment configuration.
    pub fn apply_to(&self, config: &mut SwapConfig) {
        if let Some(url) = self.quote_api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            config.endpoints = EndpointTable::single(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_and_flags_merge() {
        let cli = Cli::try_parse_from([
            "swap-terminal",
            "--link",
            "network=polygon&sell=dai&buy=weth",
            "--buy",
            "USDC",
        ])
        .unwrap();

        let params = cli.query_params();
        assert_eq!(params.get("network").map(String::as_str), Some("polygon"));
        assert_eq!(params.get("sell").map(String::as_str), Some("dai"));
        assert_eq!(params.get("buy").map(String::as_str), Some("usdc"));
    }

    #[test]
    fn test_no_flags_gives_empty_params() {
        let cli = Cli::try_parse_from(["swap-terminal"]).unwrap();
        assert!(cli.query_params().is_empty());
    }

    #[test]
    fn test_quote_api_url_override() {
        let cli = Cli::try_parse_from(["swap-terminal", "--quote-api-url", "http://127.0.0.1:8080"]).unwrap();
        let mut config = SwapConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(
            config.endpoints.endpoint(crate::config::Network::Polygon).unwrap(),
            "http://127.0.0.1:8080"
        );
    }
}
