//! # Wallet Export
//!
//! The terminal never holds keys. Placing an order hands the quote's
//! transaction fields to an external signer by writing them out as JSON.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::TransactionRequest;
use std::io::Write;

use crate::core::error::{AppError, Result};
use crate::core::service::WalletService;

/// Wallet collaborator that prints each transaction as one JSON line.
pub struct ExportWallet {
    sink: Mutex<Box<dyn Write + Send>>,
    exported: Mutex<Vec<TransactionRequest>>,
}

impl ExportWallet {
    /// Export to stdout.
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
            exported: Mutex::new(Vec::new()),
        }
    }

    /// Transactions handed off so far, oldest first.
    pub fn exported(&self) -> Vec<TransactionRequest> {
        self.exported.lock().clone()
    }
}

impl Default for ExportWallet {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletService for ExportWallet {
    async fn send_transaction(&self, transaction: TransactionRequest) -> Result<()> {
        let line = serde_json::to_string(&transaction)?;

        {
            let mut sink = self.sink.lock();
            writeln!(sink, "{}", line)
                .and_then(|_| sink.flush())
                .map_err(|e| AppError::Wallet(e.to_string()))?;
        }

        tracing::info!(
            to = %shared::truncate_address(&transaction.to),
            value = %transaction.value,
            gas = %transaction.gas,
            "Transaction exported for signing"
        );

        self.exported.lock().push(transaction);
        Ok(())
    }
}
