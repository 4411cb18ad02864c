//! # Quote Endpoint
//!
//! `GET {endpoint}/swap/v1/quote?sellToken=..&buyToken=..&sellAmount=..`

use shared::{ApiErrorResponse, Quote, QuoteRequest, QuoteSide};

use super::client::QuoteClient;
use crate::config::Network;
use crate::core::error::{AppError, Result};

/// Reject malformed requests before any network call.
pub fn validate_request(request: &QuoteRequest) -> Result<QuoteSide> {
    if request.sell_amount.is_some() && request.buy_amount.is_some() {
        return Err(AppError::AmountSpecification(
            "sellAmount and buyAmount cannot both be set",
        ));
    }

    let side = request.side().ok_or(AppError::AmountSpecification(
        "one of sellAmount or buyAmount is required",
    ))?;

    if request.sell_token == request.buy_token {
        return Err(AppError::SameToken { token: request.sell_token.clone() });
    }

    Ok(side)
}

/// Fetch one quote.
#[tracing::instrument(skip(client, request), fields(
    request_id = %uuid::Uuid::new_v4(),
    network = %network,
    sell_token = %request.sell_token,
    buy_token = %request.buy_token,
))]
pub async fn get_quote(client: &QuoteClient, network: Network, request: &QuoteRequest) -> Result<Quote> {
    let side = validate_request(request).map_err(|e| {
        tracing::warn!(error = %e, "Quote request rejected");
        e
    })?;

    let url = client.quote_url(network)?;
    tracing::debug!(side = %side, url = %url, "Fetching quote");
    let start = std::time::Instant::now();

    let mut builder = client.client.get(&url).query(request);
    if let Some(key) = &client.api_key {
        builder = builder.header("0x-api-key", key);
    }

    let response = builder.send().await.map_err(|e| {
        tracing::error!(error = %e, "Quote network error");
        AppError::Network(e.to_string())
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        tracing::error!(error = %e, "Quote body read error");
        AppError::Network(e.to_string())
    })?;
    let duration = start.elapsed();

    if status.is_success() {
        let quote = serde_json::from_str::<Quote>(&body).map_err(|e| {
            tracing::error!(error = %e, "Quote response parse error");
            AppError::Parse(e.to_string())
        })?;
        tracing::info!(
            side = %side,
            price = %quote.price,
            duration_ms = duration.as_millis(),
            "Quote received"
        );
        Ok(quote)
    } else {
        let reason = match serde_json::from_str::<ApiErrorResponse>(&body) {
            Ok(error) => error.describe(),
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
        };

        tracing::warn!(
            status = status.as_u16(),
            error = %reason,
            duration_ms = duration.as_millis(),
            "Quote request failed"
        );
        Err(AppError::Api { status: status.as_u16(), reason })
    }
}
