//! Dwell-time debounce for noisy digital inputs.
//!
//! Reed switches bounce and their long cable runs pick up noise, so a raw
//! GPIO level is only accepted as the channel's stable state once it has
//! held constant for a minimum dwell.  Any raw change, however brief,
//! restarts the dwell timer — a burst of chatter therefore never reaches
//! the stable output.
//!
//! The tracker is polarity-agnostic: it stabilises the *electrical* level.
//! Mapping that level to open/closed is the caller's job via
//! [`SwitchPolarity`](crate::config::SwitchPolarity), configured per channel.
//!
//! Driven from the poll loop with an injected `now_ms` (monotonic
//! milliseconds since boot), which keeps the state machine a pure function
//! of its inputs and trivially testable.

/// Per-channel debounce state.
#[derive(Debug, Clone, Copy)]
pub struct DebouncedInput {
    debounce_ms: u64,
    /// Last raw sample seen; `None` until the first update.
    last_raw: Option<bool>,
    /// Timestamp of the last raw level change.
    raw_changed_at_ms: u64,
    /// Accepted stable level.
    stable: bool,
}

impl DebouncedInput {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            debounce_ms,
            last_raw: None,
            raw_changed_at_ms: 0,
            stable: false,
        }
    }

    /// Feed one raw sample; returns the current stable level.
    ///
    /// The very first sample is adopted directly as the stable level: the
    /// prior state is undefined at boot, so treating it as a transition
    /// from `false` would manufacture a dwell wait (and a phantom edge)
    /// that never happened electrically.
    pub fn update(&mut self, raw: bool, now_ms: u64) -> bool {
        match self.last_raw {
            None => {
                self.last_raw = Some(raw);
                self.raw_changed_at_ms = now_ms;
                self.stable = raw;
            }
            Some(prev) => {
                if raw != prev {
                    // Restart the dwell timer on any change.
                    self.last_raw = Some(raw);
                    self.raw_changed_at_ms = now_ms;
                }
                if now_ms.saturating_sub(self.raw_changed_at_ms) >= self.debounce_ms {
                    self.stable = raw;
                }
            }
        }
        self.stable
    }

    /// Current stable level without feeding a sample.
    pub fn stable(&self) -> bool {
        self.stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: u64 = 1000;

    #[test]
    fn first_sample_is_adopted_immediately() {
        let mut d = DebouncedInput::new(DEBOUNCE);
        assert!(d.update(true, 0), "boot-time level must be reported as-is");
        let mut d = DebouncedInput::new(DEBOUNCE);
        assert!(!d.update(false, 0));
    }

    #[test]
    fn change_waits_full_dwell() {
        let mut d = DebouncedInput::new(DEBOUNCE);
        d.update(true, 0);
        assert!(d.update(false, 100), "stable holds during the dwell");
        assert!(d.update(false, 1000), "900ms held is still inside the dwell");
        assert!(!d.update(false, 1100), "dwell elapsed, new level accepted");
    }

    #[test]
    fn chatter_never_reaches_stable() {
        let mut d = DebouncedInput::new(DEBOUNCE);
        d.update(true, 0);
        // Toggle every 200ms for 3 seconds — faster than the dwell.
        let mut level = true;
        for t in (200..=3000).step_by(200) {
            level = !level;
            assert!(d.update(level, t), "stable must not move during chatter");
        }
    }

    #[test]
    fn settles_one_dwell_after_chatter_stops() {
        let mut d = DebouncedInput::new(DEBOUNCE);
        d.update(true, 0);
        let mut level = true;
        for t in (200..=3000).step_by(200) {
            level = !level;
            d.update(level, t);
        }
        // Settle low at t=3000 (last sample above was at 3000).
        assert!(d.update(false, 3500));
        assert!(d.update(false, 3999), "not yet a full dwell since last change");
        // The last change was recorded at the first sample that differed
        // from its predecessor; by 3000+1000 the level has held.
        assert!(!d.update(false, 4100));
    }

    #[test]
    fn brief_glitch_restarts_timer() {
        let mut d = DebouncedInput::new(DEBOUNCE);
        d.update(true, 0);
        d.update(false, 100); // change starts dwell
        d.update(true, 700); // glitch back
        d.update(false, 800); // change again — timer restarts here
        assert!(d.update(false, 1500), "only 700ms since the restart");
        assert!(!d.update(false, 1800));
    }

    #[test]
    fn stable_accessor_matches_update_return() {
        let mut d = DebouncedInput::new(DEBOUNCE);
        let r = d.update(true, 0);
        assert_eq!(r, d.stable());
    }
}
