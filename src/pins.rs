//! GPIO pin assignments for the RoomSentry board.
//!
//! Matches the reference wiring: reed switches on pulled-up inputs
//! (magnet present = circuit closed = pin high), PIR module with its own
//! push-pull output on a pulled-down input.

/// Door reed switch (input, pull-up).
pub const DOOR_GPIO: i32 = 17;

/// Window reed switch (input, pull-up).
pub const WINDOW_GPIO: i32 = 27;

/// PIR motion sensor (input, pull-down; the module drives the line high).
pub const PIR_GPIO: i32 = 5;
