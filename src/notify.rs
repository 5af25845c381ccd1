//! Transient notifications (toasts)

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Error,
    Info,
}

/// A notification the view asks to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub variant: Variant,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: Variant::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: Variant::Info,
        }
    }
}

/// A notification on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Stack of visible toasts. Oldest is dropped once `max_visible` is reached.
#[derive(Debug)]
pub struct Toasts {
    duration: Duration,
    max_visible: usize,
    visible: VecDeque<Toast>,
    raised: usize,
}

impl Toasts {
    pub fn new(duration: Duration, max_visible: usize) -> Self {
        Self {
            duration,
            max_visible: max_visible.max(1),
            visible: VecDeque::new(),
            raised: 0,
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        match notification.variant {
            Variant::Error => tracing::warn!(text = %notification.message, "error notification"),
            Variant::Info => tracing::info!(text = %notification.message, "notification"),
        }

        if self.visible.len() == self.max_visible {
            self.visible.pop_front();
        }
        self.visible.push_back(Toast {
            notification,
            expires_at: now + self.duration,
        });
        self.raised += 1;
    }

    /// Drop expired toasts
    pub fn prune(&mut self, now: Instant) {
        self.visible.retain(|toast| !toast.is_expired(now));
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    /// Total notifications raised since creation, including expired ones
    pub fn raised(&self) -> usize {
        self.raised
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new(Duration::from_secs(5), 3);
        toasts.push(Notification::error("backend down"), t0);

        toasts.prune(t0 + Duration::from_secs(4));
        assert_eq!(toasts.visible().count(), 1);

        toasts.prune(t0 + Duration::from_secs(5));
        assert_eq!(toasts.visible().count(), 0);
        assert_eq!(toasts.raised(), 1);
    }

    #[test]
    fn oldest_toast_is_dropped_when_full() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new(Duration::from_secs(5), 2);
        toasts.push(Notification::error("one"), t0);
        toasts.push(Notification::error("two"), t0);
        toasts.push(Notification::info("three"), t0);

        let messages: Vec<_> = toasts
            .visible()
            .map(|t| t.notification.message.as_str())
            .collect();
        assert_eq!(messages, ["two", "three"]);
        assert_eq!(toasts.raised(), 3);
    }
}
