//! Transient toasts for user-visible feedback

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: usize,
    pub created: Instant,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

/// How long a toast stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

pub struct NotificationManager {
    notifications: Vec<Notification>,
    next_id: usize,
    max_notifications: usize,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            next_id: 0,
            max_notifications: 20,
        }
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Info, title.into(), message.into())
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Success, title.into(), message.into())
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Warning, title.into(), message.into())
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Error, title.into(), message.into())
    }

    pub fn push(&mut self, level: NotificationLevel, title: String, message: String) -> usize {
        let id = self.next_id;
        self.next_id += 1;

        self.notifications.push(Notification {
            id,
            created: Instant::now(),
            level,
            title,
            message,
        });

        if self.notifications.len() > self.max_notifications {
            self.notifications.remove(0);
        }

        id
    }

    pub fn dismiss(&mut self, id: usize) {
        self.notifications.retain(|n| n.id != id);
    }

    /// Notifications younger than [`NOTIFICATION_TTL`], newest last
    pub fn active(&self, now: Instant) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| now.saturating_duration_since(n.created) < NOTIFICATION_TTL)
            .collect()
    }

    pub fn cleanup_expired(&mut self, now: Instant) {
        self.notifications
            .retain(|n| now.saturating_duration_since(n.created) < NOTIFICATION_TTL);
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
