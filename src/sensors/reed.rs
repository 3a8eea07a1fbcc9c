//! Magnetic reed switches on the door and window frames.
//!
//! Each switch is wired between its GPIO and ground with the internal
//! pull-up enabled: magnet present (door/window closed) closes the
//! circuit and the pin reads high on the reference wiring.  The driver
//! reports the raw electrical level only — debounce and open/closed
//! polarity mapping happen in the domain core.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads real GPIO levels via hw_init helpers.
//! On host/test: reads per-channel simulation atomics (default high,
//! i.e. closed on the reference wiring).

use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

static SIM_DOOR: AtomicBool = AtomicBool::new(true);
static SIM_WINDOW: AtomicBool = AtomicBool::new(true);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_door(level: bool) {
    SIM_DOOR.store(level, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_window(level: bool) {
    SIM_WINDOW.store(level, Ordering::Relaxed);
}

/// Which frame the switch is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReedChannel {
    Door,
    Window,
}

pub struct ReedSwitch {
    gpio: i32,
    channel: ReedChannel,
    last: bool,
}

impl ReedSwitch {
    pub fn new(gpio: i32, channel: ReedChannel) -> Self {
        Self {
            gpio,
            channel,
            last: true,
        }
    }

    /// GPIO pin this switch is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Which frame this switch watches.
    pub fn channel(&self) -> ReedChannel {
        self.channel
    }

    /// Raw electrical level this instant.
    pub fn read(&mut self) -> bool {
        self.last = self.read_gpio();
        self.last
    }

    #[cfg(target_os = "espidf")]
    fn read_gpio(&self) -> bool {
        hw_init::gpio_read(self.gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_gpio(&self) -> bool {
        match self.channel {
            ReedChannel::Door => SIM_DOOR.load(Ordering::Relaxed),
            ReedChannel::Window => SIM_WINDOW.load(Ordering::Relaxed),
        }
    }
}
