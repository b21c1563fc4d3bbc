//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student directory library**: a local list of student
//! records, a persisted counter, and a read-only remote directory. The `roster`
//! binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (list positions → record ids)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store outcomes into CmdResult values               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (records.rs, counter.rs, directory.rs)              │
//! │  - Validation, id assignment, notifications, persistence    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: string values under string keys    │
//! │  - FileBackend (production), MemBackend (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Time comes from an injected [`clock::Clock`], so notification expiry
//! and id assignment are deterministic under test.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user-facing command
//! - [`records`]: The record store (CRUD, search, notifications)
//! - [`counter`]: The persisted counter with a background writer
//! - [`directory`]: Remote directory fetcher with cancellation
//! - [`validation`]: Field rules for student drafts
//! - [`notify`]: Time-limited outcome notifications
//! - [`store`]: Storage abstraction and implementations
//! - [`index`]: Display positions and `id:<n>` selectors
//! - [`config`]: Configuration management
//! - [`logging`]: File logging bootstrap
//! - [`model`]: Core data types
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod counter;
pub mod directory;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod notify;
pub mod records;
pub mod store;
pub mod validation;
