//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the swap-aggregation quote API.
//!
//! ## Module Organization
//!
//! - [`quote`] - Quote request parameters, quote payload, error body, transaction request
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /swap/v1/quote?sellToken=usdc&buyToken=weth&sellAmount=1500000
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "price": "0.000824",
//!   "guaranteedPrice": "0.000816",
//!   "to": "0xdef1c0ded9bec7f1a1670819833240f027b25eff",
//!   "data": "0x...",
//!   "value": "0",
//!   "gas": "136000",
//!   "buyAmount": "1236000000000000",
//!   "sellAmount": "1500000",
//!   ...
//! }
//! ```

pub mod quote;

pub use quote::*;
