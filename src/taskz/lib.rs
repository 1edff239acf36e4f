//! # Taskz Architecture
//!
//! Taskz is a small task tracker built as a library with a thin CLI client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles exit codes     │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, pure business logic            │
//! │  - Every mutation ends in a full-collection save            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result<CmdResult>` values, never writes to stdout/stderr, and never calls
//! `std::process::exit`. The same core could serve any other frontend.
//!
//! ## Status Normalization
//!
//! Older storage files encode task status as the integers 0/1/2. These are
//! converted to the canonical [`model::Status`] enum exactly once, when the
//! document is deserialized; comparisons and filtering only ever see the
//! enum, and any rewrite persists the string labels.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Task`, `Status`, `TaskMap`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
