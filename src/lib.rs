//! RoomSentry firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod alert;
pub mod app;
pub mod config;
pub mod debounce;
pub mod occupancy;
pub mod status;

pub mod error;
pub mod pins;

// The hardware-facing modules compile on every target; the actual GPIO
// and NVS implementations are guarded by cfg attributes inside, with
// simulation fallbacks for the host.
pub mod adapters;
pub mod drivers;
pub mod sensors;
