//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC in production).  A future MQTT or push
//! adapter would implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("START | monitor running"),
            AppEvent::DoorChanged { open } => {
                info!("DOOR  | {}", if *open { "open" } else { "closed" });
            }
            AppEvent::WindowChanged { open } => {
                info!("WINDOW| {}", if *open { "open" } else { "closed" });
            }
            AppEvent::OccupancyChanged { occupied } => {
                info!("ROOM  | {}", if *occupied { "occupied" } else { "empty" });
            }
            AppEvent::AlertRaised => warn!("ALERT | raised (empty room, opening detected)"),
            AppEvent::AlertCleared => info!("ALERT | cleared"),
            AppEvent::AlertNotified => info!("ALERT | notification dispatched"),
        }
    }
}
