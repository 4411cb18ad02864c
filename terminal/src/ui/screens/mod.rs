//! # Screens
//!
//! Full-window views. The terminal has a single one.

pub mod swap;
