//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! The swap state machine only ever talks to the outside world through these
//! two seams: quotes come in through [`QuoteService`], signed-for-submission
//! payloads go out through [`WalletService`].

use async_trait::async_trait;
use shared::{Quote, QuoteRequest, TransactionRequest};

use super::error::Result;
use crate::config::Network;

/// Source of swap quotes.
///
/// Implementations must reject a request carrying both or neither amount, or
/// the same token on both sides, without touching the network.
#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Resolve one quote for `request` on `network`.
    async fn fetch_quote(&self, network: Network, request: &QuoteRequest) -> Result<Quote>;
}

/// Outbound collaborator that receives the transaction fields of a quote.
#[async_trait]
pub trait WalletService: Send + Sync {
    /// Hand a transaction to the wallet for signing and submission.
    async fn send_transaction(&self, transaction: TransactionRequest) -> Result<()>;
}
