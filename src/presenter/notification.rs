//! Transient notifications
//!
//! A notification lives for a fixed duration and is then dismissed. Only one
//! is visible at a time: showing a new one replaces the current one.

use std::time::{Duration, Instant};

/// Styling of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Get the icon/prefix for this notification kind
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    /// Get the title for this notification kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Get remaining time as a fraction (0.0 to 1.0)
    pub fn remaining_fraction(&self) -> f64 {
        let elapsed = self.created_at.elapsed().as_secs_f64();
        let total = self.duration.as_secs_f64();
        if total == 0.0 {
            return 0.0;
        }
        (1.0 - elapsed / total).clamp(0.0, 1.0)
    }
}

/// Holds at most one visible notification
#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, replacing whatever was visible
    pub fn show(&mut self, notification: Notification) {
        self.current = Some(notification);
    }

    /// Dismiss the notification if its time is up
    pub fn remove_expired(&mut self) {
        self.remove_expired_at(Instant::now());
    }

    pub fn remove_expired_at(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
