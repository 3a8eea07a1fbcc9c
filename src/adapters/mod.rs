//! Adapters: concrete implementations of the port traits plus the
//! platform seams (time, NVS, notification transport, command console).
//! ESP-IDF-specific code is cfg-gated inside each module with host
//! simulation fallbacks.

pub mod command_server;
pub mod hardware;
pub mod log_sink;
pub mod notify;
pub mod nvs;
pub mod time;
