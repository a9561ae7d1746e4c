//! # Stocktake Architecture
//!
//! Stocktake is a **UI-agnostic inventory library** with a thin CLI client on top.
//! The binary parses arguments and prints; everything with a contract lives in
//! the library.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, colors output, handles exit codes      │
//! │  - The ONLY place that writes to stdout/stderr              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the open-once / alert-once lifecycle                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One file per operation, pure business logic              │
//! │  - Returns structured `Result<CmdResult>`, never prints     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StockStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence policy
//!
//! The inventory file is loaded exactly once when the store opens and is
//! rewritten wholesale after every successful mutation. The in-memory
//! collection stays the source of truth for the lifetime of the process:
//! a failed write is surfaced as a warning, never as an aborted operation.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`inventory`]: The owned product collection and its persistence policy
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The core `Product` type
//! - [`codec`]: The comma-delimited line format
//! - [`report`]: Report and CSV formatting
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod report;
pub mod store;
