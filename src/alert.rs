//! Alert rate limiting.
//!
//! The anomaly condition ("no recent motion, yet an opening is detected")
//! is a level: it stays true every tick while the condition holds and is
//! always reflected in the status snapshot.  Notification *emission* is a
//! rate-limited side effect layered on top — without the cooldown a stuck
//! door would generate a message every 300 ms.

use log::info;

/// A notification the monitor wants delivered, carrying the rendered
/// status text.  Produced at most once per cooldown interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEvent {
    pub message: String,
}

/// Cooldown gate for alert notifications.
#[derive(Debug, Clone, Copy)]
pub struct AlertLimiter {
    cooldown_ms: u64,
    /// Updated only on an actual send.
    last_sent_ms: Option<u64>,
}

impl AlertLimiter {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            last_sent_ms: None,
        }
    }

    /// Gate check: returns `true` (and records the send) iff the alert
    /// level is raised and the cooldown since the last send has elapsed.
    pub fn should_send(&mut self, alert: bool, now_ms: u64) -> bool {
        if !alert {
            return false;
        }
        let due = match self.last_sent_ms {
            None => true,
            Some(t) => now_ms.saturating_sub(t) >= self.cooldown_ms,
        };
        if due {
            self.last_sent_ms = Some(now_ms);
            info!("alert: notification gate passed (next in {}ms)", self.cooldown_ms);
        }
        due
    }

    /// Timestamp of the last notification, if any was sent.
    pub fn last_sent_ms(&self) -> Option<u64> {
        self.last_sent_ms
    }
}
