//! # API Client
//!
//! HTTP client for the quote aggregation API.

use reqwest::Client;
use std::time::Duration;

use crate::config::{EndpointTable, Network, SwapConfig};
use crate::core::error::{AppError, Result};
use crate::core::service::QuoteService;

/// HTTP client for the quote API.
///
/// Holds one connection pool for every network; the endpoint is picked per
/// request from the [`EndpointTable`].
pub struct QuoteClient {
    pub(crate) client: Client,
    pub(crate) endpoints: EndpointTable,
    pub(crate) api_key: Option<String>,
}

impl QuoteClient {
    /// Create a client from the runtime configuration.
    pub fn new(config: &SwapConfig) -> Result<Self> {
        let mut client = Self::with_endpoints(config.endpoints.clone(), config.http_timeout)?;
        client.api_key = config.api_key.clone();
        Ok(client)
    }

    /// Create a client against an explicit endpoint table, no API key.
    pub fn with_endpoints(endpoints: EndpointTable, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoints,
            api_key: None,
        })
    }

    /// Quote URL for a network.
    pub(crate) fn quote_url(&self, network: Network) -> Result<String> {
        Ok(format!("{}/swap/v1/quote", self.endpoints.endpoint(network)?))
    }
}

#[async_trait::async_trait]
impl QuoteService for QuoteClient {
    async fn fetch_quote(&self, network: Network, request: &shared::QuoteRequest) -> Result<shared::Quote> {
        super::quote::get_quote(self, network, request).await
    }
}
