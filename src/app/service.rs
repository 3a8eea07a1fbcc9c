//! Monitor service — the hexagonal core.
//!
//! [`MonitorService`] owns the per-channel debounce trackers, the
//! occupancy tracker, and the alert limiter.  It exposes a clean,
//! hardware-agnostic API; all I/O flows through port traits injected at
//! call sites, making the entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │        MonitorService        │
//!                 │  debounce · occupancy · gate │ ──▶ AlertEvent
//!                 └──────────────────────────────┘
//! ```

use log::{info, warn};

use crate::alert::{AlertEvent, AlertLimiter};
use crate::config::SystemConfig;
use crate::debounce::DebouncedInput;
use crate::occupancy::OccupancyTracker;
use crate::status::SystemStatus;

use super::events::AppEvent;
use super::ports::{EventSink, SensorPort};
use super::query;

// ───────────────────────────────────────────────────────────────
// MonitorService
// ───────────────────────────────────────────────────────────────

/// The monitor service orchestrates all domain logic.
pub struct MonitorService {
    door: DebouncedInput,
    window: DebouncedInput,
    occupancy: OccupancyTracker,
    limiter: AlertLimiter,
    config: SystemConfig,
    status: SystemStatus,
    tick_count: u64,
}

impl MonitorService {
    /// Construct the service from configuration.
    pub fn new(config: SystemConfig) -> Self {
        let debounce_ms = u64::from(config.debounce_ms);
        Self {
            door: DebouncedInput::new(debounce_ms),
            window: DebouncedInput::new(debounce_ms),
            occupancy: OccupancyTracker::new(config.motion_window_ms()),
            limiter: AlertLimiter::new(config.alert_cooldown_ms()),
            config,
            status: SystemStatus::default(),
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!(
            "MonitorService started (debounce={}ms window={}s cooldown={}s)",
            self.config.debounce_ms, self.config.motion_window_secs, self.config.alert_cooldown_secs,
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full poll cycle: read channels → debounce → occupancy →
    /// anomaly level → snapshot → rate-limited notification.
    ///
    /// Total function of inputs and internal state; performs no I/O and
    /// cannot fail.  `now_ms` is monotonic milliseconds since boot.
    pub fn tick(
        &mut self,
        hw: &mut impl SensorPort,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) -> Option<AlertEvent> {
        self.tick_count += 1;
        let prev = self.status;

        // 1. Raw channel levels, once per tick.
        let raw = hw.read_all();

        // 2. Debounce the reed channels, then map polarity.  The trackers
        //    stabilise the electrical level; open/closed is config.
        let door_open = self
            .config
            .door_polarity
            .is_open(self.door.update(raw.door_raw, now_ms));
        let window_open = self
            .config
            .window_polarity
            .is_open(self.window.update(raw.window_raw, now_ms));

        // 3. Motion counts raw — any positive read restarts the window.
        let occupied = self.occupancy.update(raw.pir_raw, now_ms);

        // 4. Anomaly level: no recent motion, yet an opening is detected.
        //    Re-evaluated every tick; stays true while the condition holds.
        let alert = !occupied && (door_open || window_open);

        // 5. Assemble and publish the snapshot.
        self.status = SystemStatus {
            door_open,
            window_open,
            occupied,
            pir_raw: raw.pir_raw,
            alert,
            last_motion_ms: self.occupancy.last_motion_ms(),
            last_change_ms: now_ms,
        };
        self.emit_changes(&prev, sink);

        // 6. Rate-limited notification for the raised level.
        if self.limiter.should_send(alert, now_ms) {
            warn!("alert raised: door_open={door_open} window_open={window_open} occupied={occupied}");
            sink.emit(&AppEvent::AlertNotified);
            return Some(AlertEvent {
                message: query::render_alert(&self.status),
            });
        }
        None
    }

    // ── Queries ───────────────────────────────────────────────

    /// Latest assembled snapshot.
    pub fn status(&self) -> SystemStatus {
        self.status
    }

    /// Total poll ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Clone of the live configuration.
    pub fn current_config(&self) -> SystemConfig {
        self.config.clone()
    }

    // ── Internal ──────────────────────────────────────────────

    /// Emit one structured event per derived state that moved this tick.
    fn emit_changes(&self, prev: &SystemStatus, sink: &mut impl EventSink) {
        let cur = &self.status;
        if cur.door_open != prev.door_open {
            sink.emit(&AppEvent::DoorChanged { open: cur.door_open });
        }
        if cur.window_open != prev.window_open {
            sink.emit(&AppEvent::WindowChanged {
                open: cur.window_open,
            });
        }
        if cur.occupied != prev.occupied {
            sink.emit(&AppEvent::OccupancyChanged {
                occupied: cur.occupied,
            });
        }
        if cur.alert != prev.alert {
            sink.emit(if cur.alert {
                &AppEvent::AlertRaised
            } else {
                &AppEvent::AlertCleared
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::RawSnapshot;

    struct FixedSensors(RawSnapshot);
    impl SensorPort for FixedSensors {
        fn read_all(&mut self) -> RawSnapshot {
            self.0
        }
    }

    struct NullSink;
    impl EventSink for NullSink {
        fn emit(&mut self, _event: &AppEvent) {}
    }

    // All channels idle: reeds read high (closed), PIR low.
    fn idle() -> RawSnapshot {
        RawSnapshot {
            door_raw: true,
            window_raw: true,
            pir_raw: false,
        }
    }

    #[test]
    fn quiet_room_has_no_alert() {
        let mut app = MonitorService::new(SystemConfig::default());
        let mut hw = FixedSensors(idle());
        let mut sink = NullSink;
        assert!(app.tick(&mut hw, 0, &mut sink).is_none());
        let s = app.status();
        assert!(!s.door_open && !s.window_open && !s.occupied && !s.alert);
    }

    #[test]
    fn tick_count_increments() {
        let mut app = MonitorService::new(SystemConfig::default());
        let mut hw = FixedSensors(idle());
        let mut sink = NullSink;
        app.tick(&mut hw, 0, &mut sink);
        app.tick(&mut hw, 300, &mut sink);
        assert_eq!(app.tick_count(), 2);
    }

    #[test]
    fn snapshot_carries_raw_pir_level() {
        let mut app = MonitorService::new(SystemConfig::default());
        let mut hw = FixedSensors(RawSnapshot {
            pir_raw: true,
            ..idle()
        });
        let mut sink = NullSink;
        app.tick(&mut hw, 0, &mut sink);
        assert!(app.status().pir_raw);
        assert!(app.status().occupied);
    }
}
