//! # Command Layer
//!
//! One module per user-facing command. Commands operate on the record store and
//! the counter, and return a [`CmdResult`] describing what happened: the records
//! to show, the records touched, and messages for the user. They never print.

use crate::clock::Clock;
use crate::config::RosterConfig;
use crate::directory::DirectoryEntry;
use crate::index::DisplayRecord;
use crate::model::StudentRecord;
use crate::notify::{Notification, NotificationKind};
use crate::records::RecordStore;
use crate::store::StorageBackend;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod counter;
pub mod delete;
pub mod directory;
pub mod edit;
pub mod list;
pub mod search;
pub mod status;
pub mod view;

#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl RosterPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let log_dir = data_dir.join("logs");
        Self { data_dir, log_dir }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

impl From<Notification> for CmdMessage {
    fn from(n: Notification) -> Self {
        let level = match n.kind {
            NotificationKind::Success => MessageLevel::Success,
            NotificationKind::Error => MessageLevel::Error,
            NotificationKind::Info => MessageLevel::Info,
        };
        Self {
            level,
            content: n.message,
        }
    }
}

/// Home-view summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStatus {
    pub students: usize,
    pub counter: u64,
    pub data_dir: PathBuf,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<StudentRecord>,
    pub listed_records: Vec<DisplayRecord>,
    pub directory: Vec<DirectoryEntry>,
    pub counter: Option<u64>,
    pub config: Option<RosterConfig>,
    pub status: Option<RosterStatus>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<StudentRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_directory(mut self, entries: Vec<DirectoryEntry>) -> Self {
        self.directory = entries;
        self
    }

    pub fn with_counter(mut self, value: u64) -> Self {
        self.counter = Some(value);
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_status(mut self, status: RosterStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Moves the store's pending notifications into this result's messages.
    pub fn take_notifications<B: StorageBackend, C: Clock>(
        mut self,
        store: &mut RecordStore<B, C>,
    ) -> Self {
        self.messages.extend(
            store
                .notifications_mut()
                .drain()
                .into_iter()
                .map(CmdMessage::from),
        );
        self
    }
}
