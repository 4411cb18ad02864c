//! # Order Tasks
//!
//! Hands the held quote's transaction to the wallet collaborator.

use async_channel::Sender;
use shared::TransactionRequest;
use std::sync::Arc;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::core::service::WalletService;

/// Spawn the wallet hand-off and report the outcome as [`AppEvent::OrderResult`].
pub(crate) fn submit_order(
    wallet: Arc<dyn WalletService>,
    transaction: TransactionRequest,
    event_tx: Sender<AppEvent>,
) {
    spawn(async move {
        let result = wallet.send_transaction(transaction).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Order hand-off failed");
        }
        if let Err(e) = event_tx.send(AppEvent::OrderResult(result)).await {
            tracing::warn!(error = %e, "Event channel closed, order result lost");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ExportWallet;

    fn transaction() -> TransactionRequest {
        TransactionRequest {
            to: "0xdef1c0ded9bec7f1a1670819833240f027b25eff".to_string(),
            data: "0xd9627aa4".to_string(),
            value: "0".to_string(),
            gas: "136000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_outcome_is_reported() {
        // Arrange
        let wallet = Arc::new(ExportWallet::with_writer(Box::new(std::io::sink())));
        let (event_tx, event_rx) = async_channel::unbounded();

        // Act
        submit_order(wallet.clone(), transaction(), event_tx);
        let event = event_rx.recv().await.unwrap();

        // Assert
        assert!(matches!(event, AppEvent::OrderResult(Ok(()))));
        assert_eq!(wallet.exported(), vec![transaction()]);
    }

    #[tokio::test]
    async fn test_closed_channel_still_hands_off_transaction() {
        let wallet = Arc::new(ExportWallet::with_writer(Box::new(std::io::sink())));
        let (event_tx, event_rx) = async_channel::unbounded::<AppEvent>();
        drop(event_rx);

        submit_order(wallet.clone(), transaction(), event_tx.clone());
        for _ in 0..50 {
            if !wallet.exported().is_empty() {
                break;
            }
            tokio::task::yield_now().await;
        }

        assert_eq!(wallet.exported().len(), 1);
        assert!(event_tx.is_closed());
    }
}
