//! # Stockroom Architecture
//!
//! Stockroom is an inventory library for three fixed product families
//! (electronics, food, medicine) with a small terminal client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Arguments, interactive menu, table rendering             │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the inventory and its store, dispatches commands    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: inventory.rs, model.rs, report.rs, codec.rs          │
//! │  Storage: store/ (CSV files per category)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust values and returns
//! `Result`/`CmdResult`. It never prints and never exits; diagnostics go
//! through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`inventory`]: The in-memory store and single-field updates
//! - [`model`]: Products, variants and the category layout table
//! - [`report`]: Stock totals and low-stock detection
//! - [`codec`]: CSV quoting, escaping and record splitting
//! - [`store`]: Storage backends and the category-file mapping
//! - [`config`]: Configuration loading
//! - [`logging`]: Tracing setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod model;
pub mod report;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
