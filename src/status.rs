//! Status snapshot and the shared single-slot publication cell.
//!
//! [`SystemStatus`] is the externally observable view of the monitor,
//! rebuilt whole every tick.  The tick loop is the only writer; query
//! handlers on other threads read through [`StatusCell`], which swaps the
//! entire `Copy` snapshot under a mutex so a reader can never observe a
//! half-updated status.

use std::sync::Mutex;

/// Point-in-time monitor status.  Derived entirely from tracker state
/// each tick; never mutated in place after publication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemStatus {
    /// Debounced, polarity-mapped door state.
    pub door_open: bool,
    /// Debounced, polarity-mapped window state.
    pub window_open: bool,
    /// Motion seen within the occupancy window.
    pub occupied: bool,
    /// Raw PIR level this tick (no debounce).
    pub pir_raw: bool,
    /// Level-triggered anomaly flag: `!occupied && (door_open || window_open)`.
    pub alert: bool,
    /// Monotonic ms of the last motion event, if any.
    pub last_motion_ms: Option<u64>,
    /// Monotonic ms of the tick that produced this snapshot.
    pub last_change_ms: u64,
}

/// Single-slot, always-overwrite mailbox for the latest snapshot.
pub struct StatusCell {
    slot: Mutex<SystemStatus>,
}

impl Default for StatusCell {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusCell {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(SystemStatus::default()),
        }
    }

    /// Publish a fresh snapshot (tick loop only).
    pub fn publish(&self, status: SystemStatus) {
        // A poisoned lock can only mean a reader panicked mid-copy; the
        // data is still a whole snapshot, so keep going.
        let mut guard = match self.slot.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = status;
    }

    /// Copy out the latest snapshot.
    pub fn snapshot(&self) -> SystemStatus {
        let guard = match self.slot.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard
    }
}
