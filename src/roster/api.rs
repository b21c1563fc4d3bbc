//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for roster operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the record store, the counter cell and the loaded configuration
//! - **Normalizes inputs** (display positions and `id:<n>` strings to selectors)
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business rules; those live in
//! `commands/*.rs` and `records.rs`.
//!
//! ## Generic Over the Backend and the Clock
//!
//! `RosterApi<B: StorageBackend, C: Clock>`:
//! - Production: `RosterApi<FileBackend, SystemClock>`
//! - Testing: `RosterApi<MemBackend, ManualClock>`
//!
//! The record store and the counter share one backend through an `Arc`.

use crate::clock::Clock;
use crate::commands;
use crate::config::RosterConfig;
use crate::counter::CounterCell;
use crate::directory::DirectoryFetcher;
use crate::error::{Result, RosterError};
use crate::index::RecordSelector;
use crate::model::{StudentDraft, StudentPatch};
use crate::records::RecordStore;
use crate::store::gateway::StorageGateway;
use crate::store::{COUNTER_KEY, STUDENTS_KEY, StorageBackend};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

pub struct RosterApi<B: StorageBackend, C: Clock> {
    store: RecordStore<B, C>,
    counter: CounterCell,
    config: RosterConfig,
    paths: commands::RosterPaths,
}

impl<B: StorageBackend + 'static, C: Clock> RosterApi<B, C> {
    /// Hydrates the record store and the counter from `backend`.
    pub fn open(backend: B, clock: C, config: RosterConfig, paths: commands::RosterPaths) -> Self {
        let gateway = StorageGateway::from_shared(Arc::new(backend));
        let store = RecordStore::open(gateway.clone(), clock, config.notification_ttl());
        let counter = CounterCell::open(gateway);
        log::debug!(
            "event=api_open students={} counter={} data_dir={}",
            store.len(),
            counter.value(),
            paths.data_dir.display()
        );
        Self {
            store,
            counter,
            config,
            paths,
        }
    }
}

impl<B: StorageBackend, C: Clock> RosterApi<B, C> {
    pub fn status(&self) -> commands::CmdResult {
        commands::status::run(&self.store, &self.counter, &self.paths)
    }

    pub fn add_student(&mut self, draft: &StudentDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn edit_student(&mut self, index: &str, patch: StudentPatch) -> Result<commands::CmdResult> {
        let selector = parse_selector(index)?;
        commands::edit::run(&mut self.store, selector, patch)
    }

    pub fn delete_students<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(indexes)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn list_students(&self) -> commands::CmdResult {
        commands::list::run(&self.store)
    }

    pub fn search_students(&self, query: &str) -> commands::CmdResult {
        commands::search::run(&self.store, query)
    }

    pub fn view_students<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(indexes)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn counter(&mut self, action: CounterAction) -> Result<commands::CmdResult> {
        commands::counter::run(&mut self.counter, action)
    }

    /// Fetches the remote directory. `limit` overrides the configured one.
    pub fn directory(&self, limit: Option<usize>) -> Result<commands::CmdResult> {
        let fetcher = DirectoryFetcher::new(
            &self.config.directory_url,
            limit.unwrap_or(self.config.directory_limit),
            self.config.directory_timeout(),
        )?;
        commands::directory::run(&fetcher)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Where each persisted piece lives.
    pub fn storage_locations(&self) -> Vec<(&'static str, PathBuf)> {
        let gateway = self.store.gateway();
        vec![
            ("data", self.paths.data_dir.clone()),
            ("students", gateway.location(STUDENTS_KEY)),
            ("counter", gateway.location(COUNTER_KEY)),
            ("config", self.paths.data_dir.join("config.json")),
            ("logs", self.paths.log_dir.clone()),
        ]
    }
}

fn parse_selector(input: &str) -> Result<RecordSelector> {
    RecordSelector::from_str(input).map_err(RosterError::Api)
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordSelector>> {
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::counter::CounterAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RosterPaths, RosterStatus};
