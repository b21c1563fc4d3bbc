//! # Record Store
//!
//! The authoritative in-memory collection of students for a session.
//!
//! The store hydrates from storage once when opened and then writes the whole
//! collection back after every mutation. Reads never touch storage.
//!
//! ## Mutation outcomes
//!
//! - Validation failure: `RosterError::Validation`, nothing changes, nothing
//!   is written.
//! - Storage failure: the mutation stays applied in memory and an error
//!   notification is queued. The session keeps working with unsaved data.
//!
//! Either way a record is applied whole or not at all.

use crate::clock::Clock;
use crate::error::{Result, RosterError};
use crate::model::{StudentDraft, StudentRecord};
use crate::notify::{NotificationKind, NotificationQueue};
use crate::store::gateway::StorageGateway;
use crate::store::{STUDENTS_KEY, StorageBackend};
use crate::validation::validate;
use chrono::Duration;

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save. Storage may be full.";

pub struct RecordStore<B: StorageBackend, C: Clock> {
    gateway: StorageGateway<B>,
    clock: C,
    records: Vec<StudentRecord>,
    notifications: NotificationQueue,
    notification_ttl: Duration,
    last_id: i64,
}

impl<B: StorageBackend, C: Clock> RecordStore<B, C> {
    /// Builds the store and hydrates it from storage.
    pub fn open(gateway: StorageGateway<B>, clock: C, notification_ttl: Duration) -> Self {
        let mut store = Self {
            gateway,
            clock,
            records: Vec::new(),
            notifications: NotificationQueue::new(),
            notification_ttl,
            last_id: 0,
        };
        store.hydrate();
        store
    }

    /// Replaces the in-memory collection with what storage holds.
    pub fn hydrate(&mut self) {
        self.records = self.gateway.load_records(STUDENTS_KEY);
        self.last_id = self.records.iter().map(|r| r.id).max().unwrap_or(0);
        log::debug!("event=records_hydrate count={}", self.records.len());
    }

    pub fn list(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Zero-based position of `id` in the collection.
    pub fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn add(&mut self, draft: &StudentDraft) -> Result<StudentRecord> {
        let draft = draft.trimmed();
        let errors = validate(&draft);
        if !errors.is_empty() {
            return Err(RosterError::Validation(errors));
        }

        let id = self.next_id()?;
        let record = StudentRecord::from_draft(id, draft);
        self.records.push(record.clone());
        log::info!("event=student_add id={} count={}", id, self.records.len());

        self.persist();
        self.notify(
            format!("{} has been added!", record.name),
            NotificationKind::Success,
        );
        Ok(record)
    }

    /// Replaces every field of the record with `id`, keeping id and position.
    pub fn update(&mut self, id: i64, draft: &StudentDraft) -> Result<StudentRecord> {
        let draft = draft.trimmed();
        let errors = validate(&draft);
        if !errors.is_empty() {
            return Err(RosterError::Validation(errors));
        }

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RosterError::StudentNotFound(id))?;
        record.apply(draft);
        let updated = record.clone();
        log::info!("event=student_update id={}", id);

        self.persist();
        self.notify(
            format!("{} updated successfully!", updated.name),
            NotificationKind::Success,
        );
        Ok(updated)
    }

    /// Removes the record with `id`. Absent ids leave the collection as is,
    /// but the collection is still written and a notice is still queued.
    pub fn delete(&mut self, id: i64) -> Option<StudentRecord> {
        let removed = self
            .position(id)
            .map(|index| self.records.remove(index));
        log::info!(
            "event=student_delete id={} found={} count={}",
            id,
            removed.is_some(),
            self.records.len()
        );

        self.persist();
        let name = removed
            .as_ref()
            .map(|r| r.name.as_str())
            .unwrap_or("Student");
        self.notify(format!("{} removed.", name), NotificationKind::Info);
        removed
    }

    /// Case-insensitive substring match on names. A blank query matches all.
    pub fn search(&self, query: &str) -> Vec<&StudentRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    /// Drops notifications whose time is up.
    pub fn expire_notifications(&mut self) -> usize {
        let now = self.clock.now();
        self.notifications.expire(now)
    }

    pub fn gateway(&self) -> &StorageGateway<B> {
        &self.gateway
    }

    fn next_id(&mut self) -> Result<i64> {
        let after_last = self
            .last_id
            .checked_add(1)
            .ok_or(RosterError::IdsExhausted(self.last_id))?;
        let id = self.clock.now().timestamp_millis().max(after_last);
        self.last_id = id;
        Ok(id)
    }

    fn persist(&mut self) {
        if let Err(err) = self.gateway.save_records(STUDENTS_KEY, &self.records) {
            log::warn!("event=records_persist status=failed error={}", err);
            self.notify(SAVE_FAILED_MESSAGE, NotificationKind::Error);
        }
    }

    fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let now = self.clock.now();
        self.notifications
            .push(message, kind, self.notification_ttl, now);
    }
}
