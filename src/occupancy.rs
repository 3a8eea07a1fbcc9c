//! Motion-derived occupancy tracking.
//!
//! The PIR channel is consumed raw — any positive read counts as motion,
//! no debounce.  The room is considered occupied for a rolling window
//! after the last motion event; once the window expires without further
//! motion the room reads unoccupied.
//!
//! Note the PIR module itself needs 30–60 s after power-up before its
//! output is trustworthy; `main` logs a warm-up notice at boot.

use log::info;

/// Rolling-window occupancy tracker.
#[derive(Debug, Clone, Copy)]
pub struct OccupancyTracker {
    window_ms: u64,
    /// Timestamp of the last true motion read; monotonically non-decreasing.
    last_motion_ms: Option<u64>,
    occupied: bool,
}

impl OccupancyTracker {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_motion_ms: None,
            occupied: false,
        }
    }

    /// Feed one raw PIR sample; returns the occupancy flag.
    ///
    /// Occupied holds for strictly less than `window_ms` after the last
    /// motion: at exactly `last_motion + window_ms` the room reads empty.
    pub fn update(&mut self, motion_raw: bool, now_ms: u64) -> bool {
        if motion_raw {
            self.last_motion_ms = Some(now_ms);
        }

        let occupied = match self.last_motion_ms {
            Some(t) => now_ms.saturating_sub(t) < self.window_ms,
            None => false,
        };

        if occupied != self.occupied {
            info!(
                "occupancy: {}",
                if occupied { "motion detected" } else { "window expired" }
            );
        }
        self.occupied = occupied;
        occupied
    }

    /// Timestamp of the last motion event, if any.
    pub fn last_motion_ms(&self) -> Option<u64> {
        self.last_motion_ms
    }

    /// Current occupancy flag without feeding a sample.
    pub fn occupied(&self) -> bool {
        self.occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u64 = 15_000;

    #[test]
    fn unoccupied_before_any_motion() {
        let mut occ = OccupancyTracker::new(WINDOW);
        assert!(!occ.update(false, 0));
        assert!(!occ.update(false, 60_000));
        assert_eq!(occ.last_motion_ms(), None);
    }

    #[test]
    fn occupied_for_exactly_the_window() {
        let mut occ = OccupancyTracker::new(WINDOW);
        assert!(occ.update(true, 1000));
        assert!(occ.update(false, 15_999), "still inside the window");
        assert!(!occ.update(false, 16_000), "boundary is exclusive");
    }

    #[test]
    fn motion_extends_the_window() {
        let mut occ = OccupancyTracker::new(WINDOW);
        occ.update(true, 0);
        occ.update(true, 10_000);
        assert!(occ.update(false, 20_000), "window restarts at 10s");
        assert!(!occ.update(false, 25_000));
        assert_eq!(occ.last_motion_ms(), Some(10_000));
    }

    #[test]
    fn last_motion_is_non_decreasing() {
        let mut occ = OccupancyTracker::new(WINDOW);
        occ.update(true, 100);
        occ.update(false, 200);
        assert_eq!(occ.last_motion_ms(), Some(100));
        occ.update(true, 300);
        assert_eq!(occ.last_motion_ms(), Some(300));
    }
}
