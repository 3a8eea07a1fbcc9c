//! Application layer: the hexagonal core and its port boundary.
//!
//! - [`service`] — the `MonitorService` tick orchestrator
//! - [`ports`] — traits the adapters implement
//! - [`events`] — structured outbound events
//! - [`query`] — operator command parsing and status rendering

pub mod events;
pub mod ports;
pub mod query;
pub mod service;
