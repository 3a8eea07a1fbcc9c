//! Outbound application events.
//!
//! The [`MonitorService`](super::service::MonitorService) emits these
//! through the [`EventSink`](super::ports::EventSink) port whenever a
//! derived state changes.  Adapters on the other side decide what to do
//! with them — the default sink writes one structured log line each.

/// Structured events emitted by the monitor core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The monitor service has started.
    Started,

    /// Debounced door state changed.
    DoorChanged { open: bool },

    /// Debounced window state changed.
    WindowChanged { open: bool },

    /// Occupancy flag changed.
    OccupancyChanged { occupied: bool },

    /// The anomaly level went high (unoccupied with an opening).
    AlertRaised,

    /// The anomaly level cleared.
    AlertCleared,

    /// A rate-limited alert notification was actually emitted.
    AlertNotified,
}
