//! Banner notifications
//!
//! Bounded deque of transient success/error banners: at most
//! `MAX_VISIBLE` at a time with the oldest evicted on overflow, each
//! expiring `TTL` after creation regardless of user interaction.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const MAX_VISIBLE: usize = 4;
pub const TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: Kind,
    pub message: String,
    created_at: Instant,
}

#[derive(Debug, Default)]
pub struct Notices {
    items: VecDeque<Notice>,
}

impl Notices {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Kind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Kind::Error, message);
    }

    pub fn push(&mut self, kind: Kind, message: impl Into<String>) {
        if self.items.len() == MAX_VISIBLE {
            self.items.pop_front();
        }
        self.items.push_back(Notice {
            kind,
            message: message.into(),
            created_at: Instant::now(),
        });
    }

    /// Drop banners past their TTL. Called on every UI tick.
    pub fn sweep(&mut self, now: Instant) {
        self.items
            .retain(|n| now.duration_since(n.created_at) < TTL);
    }

    /// Visible banners, newest first
    pub fn visible(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_evicts_oldest() {
        let mut notices = Notices::default();
        for i in 0..MAX_VISIBLE + 2 {
            notices.error(format!("failure {i}"));
        }

        assert_eq!(notices.len(), MAX_VISIBLE);
        // Newest first
        let first = notices.visible().next().unwrap();
        assert_eq!(first.message, "failure 5");
        let last = notices.visible().last().unwrap();
        assert_eq!(last.message, "failure 2");
    }

    #[test]
    fn sweep_expires_old_banners() {
        let mut notices = Notices::default();
        notices.success("saved");

        notices.sweep(Instant::now());
        assert_eq!(notices.len(), 1);

        notices.sweep(Instant::now() + TTL + Duration::from_millis(1));
        assert!(notices.is_empty());
    }
}
