//! # Configuration
//!
//! Immutable configuration built once at startup and handed to the store,
//! handlers and quote client by `Arc`:
//!
//! - **[`tokens`]**: token registry (decimals, addresses, selectable allowlist)
//! - **[`network`]**: supported networks, chain ids, quote endpoints
//! - **[`settings`]**: [`SwapConfig`] loaded from environment variables
//! - **[`preferences`]**: persisted language / theme

pub mod network;
pub mod preferences;
pub mod settings;
pub mod tokens;

pub use network::{EndpointTable, Network};
pub use preferences::{Language, Preferences, Theme};
pub use settings::SwapConfig;
pub use tokens::{TokenDetail, TokenRegistry};
