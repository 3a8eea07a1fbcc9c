//! Hardware adapter — bridges real peripherals to the domain port traits.
//!
//! Owns the [`SensorHub`], exposing it through [`SensorPort`].  This is
//! the only sensor path in the system that touches actual hardware; on
//! non-espidf targets the underlying drivers use cfg-gated simulation
//! stubs.

use crate::app::ports::SensorPort;
use crate::sensors::{RawSnapshot, SensorHub};

/// Concrete adapter that puts the sensor hub behind the port trait.
pub struct HardwareAdapter {
    hub: SensorHub,
}

impl HardwareAdapter {
    pub fn new(hub: SensorHub) -> Self {
        Self { hub }
    }
}

impl SensorPort for HardwareAdapter {
    fn read_all(&mut self) -> RawSnapshot {
        self.hub.read_all()
    }
}
