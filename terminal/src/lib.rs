//! # Swap Terminal - Library Root
//!
//! A **native desktop GUI** for swapping ERC-20 tokens through a
//! swap-aggregation quote API. The binary crate (`main.rs`) wires these
//! modules together; everything is public so integration tests can drive the
//! swap flow without a window.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI + native window    │
//! │  Tokio         - Debounce timers and quote requests    │
//! │  Reqwest       - Quote API client                      │
//! │  tracing       - Structured logs to a rolling file     │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTPS GET /swap/v1/quote     │ JSON line
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Quote API      │          │  External signer        │
//! │  (per network)  │          │  (stdout)               │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: swap state machine
//!   - `state` / `reducer`: [`app::TradeState`] and the pure `reduce` function
//!   - `store`: shared state plus quote tickets
//!   - `tasks`: debounced quote fetchers, order submission
//!   - `handlers`: amount, token, direction, network, reset, order, settings
//! - **config**: token registry, networks, environment settings, preferences
//! - **core**: [`AppError`] and the service traits
//! - **services**: reqwest quote client, export wallet
//! - **ui**: header, swap screen, theme, translations
//! - **debug**: logging setup
//! - **utils**: decimal units, input validation, query strings, runtime
//! - **cli**: command-line flags
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── cli / config / debug (startup)
//!   │
//!   ├── app (state, reducer, handlers, fetchers)
//!   │   ├── services::api (quote requests)
//!   │   └── services::wallet (transaction export)
//!   │
//!   └── ui (rendering)
//!       ├── screens::swap
//!       ├── theme
//!       └── i18n
//! ```
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin swap-terminal -- --link "network=polygon&sell=dai&buy=weth"
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --workspace
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, TradeState};
pub use core::{AppError, Result};
