//! crates/study_spots_core/src/notifications.rs
//!
//! Ephemeral, queued, user-visible messages surfaced after mutations.

use uuid::Uuid;

/// How long a notification stays visible unless dismissed first.
pub const NOTIFICATION_TTL_MS: u64 = 3000;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
}

/// One queued message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
}

/// Pending notifications in enqueue order.
///
/// Expiry is driven from outside by a per-id timer. Removal is idempotent,
/// so a timer firing after an explicit dismissal is harmless, and several
/// notifications may be visible at once (no de-duplication or collapsing).
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification and returns its generated id.
    pub fn enqueue(&mut self, message: impl Into<String>, severity: Severity) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push(Notification {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Removes the notification with `id`. Removing an absent id is not
    /// an error.
    pub fn dismiss(&mut self, id: Uuid) {
        self.entries.retain(|n| n.id != id);
    }

    pub fn get(&self, id: Uuid) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id == id)
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_enqueue_order_without_collapsing() {
        let mut queue = NotificationQueue::new();
        queue.enqueue("Saved to Favorites", Severity::Success);
        queue.enqueue("Saved to Favorites", Severity::Success);
        queue.enqueue("Thanks for the live update!", Severity::Info);

        let messages: Vec<&str> = queue.entries().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Saved to Favorites",
                "Saved to Favorites",
                "Thanks for the live update!"
            ]
        );
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = NotificationQueue::new();
        let first = queue.enqueue("one", Severity::Success);
        let second = queue.enqueue("two", Severity::Info);

        queue.dismiss(first);
        assert!(queue.get(first).is_none());
        assert!(queue.get(second).is_some());
    }

    #[test]
    fn dismissing_an_absent_id_is_harmless() {
        let mut queue = NotificationQueue::new();
        let id = queue.enqueue("one", Severity::Success);
        queue.dismiss(id);
        // A second removal (the expiry timer firing late) is a no-op.
        queue.dismiss(id);
        assert!(queue.entries().is_empty());
    }
}
