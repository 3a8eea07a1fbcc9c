//! System configuration parameters
//!
//! All tunable parameters for the RoomSentry monitor.
//! Values can be overridden via NVS (non-volatile storage).

use serde::{Deserialize, Serialize};

/// Electrical polarity of a door/window reed channel.
///
/// The debounce tracker is polarity-agnostic; this flag maps the stable
/// raw level to an "open" reading once per tick, per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchPolarity {
    /// Raw high = circuit closed = door/window closed (pull-up + magnet).
    ClosedHigh,
    /// Raw high = circuit open = door/window open.
    ClosedLow,
}

impl SwitchPolarity {
    /// Map a stable raw level to an "open" reading.
    pub fn is_open(self, raw: bool) -> bool {
        match self {
            Self::ClosedHigh => !raw,
            Self::ClosedLow => raw,
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Timing ---
    /// Poll loop interval (milliseconds)
    pub poll_interval_ms: u32,
    /// Minimum dwell before a reed level change is accepted (milliseconds)
    pub debounce_ms: u32,

    // --- Occupancy ---
    /// Rolling window after the last motion event during which the room
    /// counts as occupied (seconds)
    pub motion_window_secs: u32,

    // --- Alerts ---
    /// Minimum spacing between repeated alert notifications (seconds)
    pub alert_cooldown_secs: u32,

    // --- Channel polarity ---
    /// Door reed polarity
    pub door_polarity: SwitchPolarity,
    /// Window reed polarity
    pub window_polarity: SwitchPolarity,
}

impl SystemConfig {
    /// Motion window in milliseconds (tick timestamps are in ms).
    pub fn motion_window_ms(&self) -> u64 {
        u64::from(self.motion_window_secs) * 1000
    }

    /// Alert cooldown in milliseconds.
    pub fn alert_cooldown_ms(&self) -> u64 {
        u64::from(self.alert_cooldown_secs) * 1000
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Timing
            poll_interval_ms: 300,
            debounce_ms: 1000,

            // Occupancy
            motion_window_secs: 15,

            // Alerts
            alert_cooldown_secs: 30,

            // Polarity (reference wiring: pull-up + magnet = high = closed)
            door_polarity: SwitchPolarity::ClosedHigh,
            window_polarity: SwitchPolarity::ClosedHigh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = SystemConfig::default();
        assert!(c.poll_interval_ms > 0);
        assert!(c.debounce_ms >= c.poll_interval_ms);
        assert!(c.motion_window_secs > 0);
        assert!(c.alert_cooldown_secs > 0);
    }

    #[test]
    fn timing_ratios_make_sense() {
        let c = SystemConfig::default();
        assert!(
            u64::from(c.debounce_ms) < c.motion_window_ms(),
            "debounce must settle well inside the occupancy window"
        );
        assert!(
            c.motion_window_ms() < c.alert_cooldown_ms(),
            "occupancy expiry should be faster than the alert cooldown"
        );
    }

    #[test]
    fn polarity_mapping() {
        assert!(SwitchPolarity::ClosedHigh.is_open(false));
        assert!(!SwitchPolarity::ClosedHigh.is_open(true));
        assert!(SwitchPolarity::ClosedLow.is_open(true));
        assert!(!SwitchPolarity::ClosedLow.is_open(false));
    }

    #[test]
    fn serde_roundtrip() {
        let c = SystemConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: SystemConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.poll_interval_ms, c2.poll_interval_ms);
        assert_eq!(c.debounce_ms, c2.debounce_ms);
        assert_eq!(c.door_polarity, c2.door_polarity);
    }

    #[test]
    fn postcard_roundtrip() {
        let c = SystemConfig::default();
        let bytes = postcard::to_allocvec(&c).unwrap();
        let c2: SystemConfig = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(c.motion_window_secs, c2.motion_window_secs);
        assert_eq!(c.alert_cooldown_secs, c2.alert_cooldown_secs);
        assert_eq!(c.window_polarity, c2.window_polarity);
    }
}
