//! # invtrack Architecture
//!
//! invtrack is a small, **UI-agnostic inventory library** with a CLI client. The
//! library owns the records, the text format they are stored in, and every
//! operation on them; the binary only parses arguments and prints results.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot subcommands and the interactive session         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session inventory, store, paths and settings    │
//! │  - Thin dispatch to commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (inventory.rs) + Codec (codec.rs)             │
//! │  Storage Layer (store/): DataStore, FileStore, InMemoryStore│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns Rust types. It
//! never writes to stdout/stderr and never exits the process. Diagnostics go
//! through `tracing`; user-facing text goes through `CmdResult.messages`.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** and **codec**: thorough unit tests against `InMemoryStore`.
//! 2. **API**: dispatch tests.
//! 3. **CLI**: end-to-end tests of the binary in `tests/`, plus unit tests of
//!    the interactive session driven by in-memory input.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: logic for each operation
//! - [`inventory`]: the ordered in-memory record store and item handles
//! - [`codec`]: the quoted, delimited text format
//! - [`store`]: whole-file persistence backends
//! - [`model`]: `Item`, `Scope`, `AmountChange`
//! - [`config`]: the settings file
//! - [`init`]: path resolution and context bootstrap
//! - [`error`]: error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod inventory;
pub mod model;
pub mod store;
