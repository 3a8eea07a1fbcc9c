//! Hardware drivers: one-shot peripheral init and the task watchdog.

pub mod hw_init;
pub mod watchdog;
