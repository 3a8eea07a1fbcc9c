//! Sensor subsystem — individual channel drivers and the aggregating [`SensorHub`].
//!
//! The hub owns the three channel drivers and produces a [`RawSnapshot`]
//! each tick.  Raw means raw: no debounce, no polarity mapping — that is
//! the domain core's job.  On non-espidf targets the drivers read
//! process-local simulation atomics instead of GPIO.

pub mod pir;
pub mod reed;

use pir::PirSensor;
use reed::ReedSwitch;

/// Instantaneous raw levels of the three channels, produced once per
/// poll cycle and not retained beyond the tick that consumed it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSnapshot {
    /// Door reed electrical level (high = circuit closed on the
    /// reference wiring).
    pub door_raw: bool,
    /// Window reed electrical level.
    pub window_raw: bool,
    /// PIR output level (high = motion).
    pub pir_raw: bool,
}

/// Aggregates the channel drivers and produces a unified raw snapshot.
pub struct SensorHub {
    pub door: ReedSwitch,
    pub window: ReedSwitch,
    pub pir: PirSensor,
}

impl SensorHub {
    /// Construct a new hub.  Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(door: ReedSwitch, window: ReedSwitch, pir: PirSensor) -> Self {
        Self { door, window, pir }
    }

    /// Read every channel.  GPIO level reads cannot fail once the pins
    /// are configured, so this is infallible by construction.
    pub fn read_all(&mut self) -> RawSnapshot {
        RawSnapshot {
            door_raw: self.door.read(),
            window_raw: self.window.read(),
            pir_raw: self.pir.read(),
        }
    }
}
