//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output
//! formatting.
//!
//! ## Naked Execution (`roster`)
//!
//! Running `roster` with no arguments shows the home view: how many students are
//! saved and the counter value.
//!
//! ## Addressing Records
//!
//! `list` numbers records from 1. `edit`, `view` and `delete` take those numbers,
//! or `id:<n>` for an exact record id.
//!
//! ## Data Directory
//!
//! `--data-dir`, else `ROSTER_DATA_DIR`, else the platform data directory.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `print`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
