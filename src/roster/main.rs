//! # Roster CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/roster/cli/)                                │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal output (print.rs)                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (src/roster/api.rs)                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation failures are printed one field per line; every error exits with
//! status 1.

mod cli;

use roster::error::RosterError;

fn main() {
    if let Err(e) = cli::run() {
        match &e {
            RosterError::Validation(errors) => {
                eprintln!("Error: Invalid student");
                for (field, message) in errors.iter() {
                    eprintln!("  {}: {}", field, message);
                }
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
