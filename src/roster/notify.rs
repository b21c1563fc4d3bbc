//! Short-lived outcome messages.
//!
//! Every notification carries its own deadline (`created_at + duration`).
//! [`NotificationQueue::expire`] only ever removes entries whose own deadline
//! has passed, so there is no ordering dependency between them.

use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub duration: Duration,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// `None` when the deadline lies past the representable range; such a
    /// notification never expires on its own.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.checked_add_signed(self.duration)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|at| now >= at)
    }
}

#[derive(Debug, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a message and returns its id.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            duration,
            created_at: now,
        });
        id
    }

    /// Removes a notification ahead of its deadline. Returns false if it was
    /// already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drops every notification whose deadline is at or before `now`.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        before - self.items.len()
    }

    /// Notifications still alive at `now`, oldest first.
    pub fn active(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(move |n| !n.is_expired(now))
    }

    /// Hands over all pending notifications, for clients that render once.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.items)
    }

    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
