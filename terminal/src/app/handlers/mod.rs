//! # Event Handlers
//!
//! Event handlers organized by domain for better modularity and testability.

pub mod settings;
pub mod swap;
