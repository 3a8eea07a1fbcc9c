//! PIR motion sensor (HC-SR501 class).
//!
//! The module drives its output high while motion is detected; the pin
//! uses the internal pull-down so an unplugged sensor reads "no motion".
//! The element needs 30–60 s after power-up before its output is
//! trustworthy — `main` logs a warm-up notice at boot, and false
//! positives during that period only extend the occupancy window (they
//! can never raise an alert, since occupancy suppresses it).
//!
//! On host/test targets the driver reads a simulation atomic.

use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// Seconds the PIR element needs after power-up before readings settle.
pub const WARMUP_SECS: u32 = 60;

static SIM_MOTION: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_motion(level: bool) {
    SIM_MOTION.store(level, Ordering::Relaxed);
}

pub struct PirSensor {
    gpio: i32,
    last: bool,
}

impl PirSensor {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, last: false }
    }

    /// GPIO pin the sensor is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Raw output level this instant (high = motion).
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
        SIM_MOTION.load(Ordering::Relaxed)
    }
}
