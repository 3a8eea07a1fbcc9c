//! Status query responder.
//!
//! Turns free-form command text from the operator channel into a reply
//! rendered from a [`SystemStatus`] snapshot.  Pure formatting — no state
//! is touched, so repeated queries between ticks return identical text.
//!
//! Recognised tokens (case-insensitive, surrounding whitespace ignored):
//! `status`, `door`, `window`, `pir`, `help`.  Anything else gets the
//! help text.

use crate::status::SystemStatus;

/// Parsed operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Full status block.
    Status,
    /// Door state only.
    Door,
    /// Window state only.
    Window,
    /// Occupancy state only.
    Pir,
    /// Command list (also the fallback for anything unrecognised).
    Help,
}

impl Command {
    /// Parse a command token.  Garbled input is not an error — it maps
    /// deterministically to [`Command::Help`].
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "status" => Self::Status,
            "door" => Self::Door,
            "window" => Self::Window,
            "pir" | "occupancy" => Self::Pir,
            _ => Self::Help,
        }
    }
}

const HELP_TEXT: &str = "commands: status / door / window / pir / help";

/// Answer one command against a snapshot.
pub fn respond(status: &SystemStatus, text: &str) -> String {
    match Command::parse(text) {
        Command::Status => render_status(status),
        Command::Door => format!("door: {}", open_str(status.door_open)),
        Command::Window => format!("window: {}", open_str(status.window_open)),
        Command::Pir => format!("room: {}", occupancy_str(status.occupied)),
        Command::Help => HELP_TEXT.to_string(),
    }
}

/// Full human-readable status block.
pub fn render_status(status: &SystemStatus) -> String {
    format!(
        "door: {}\n\
         window: {}\n\
         room: {}\n\
         last motion: {}\n\
         system: {}\n\
         updated: {}",
        open_str(status.door_open),
        open_str(status.window_open),
        occupancy_str(status.occupied),
        motion_age(status),
        if status.alert { "ALERT" } else { "normal" },
        uptime_str(status.last_change_ms),
    )
}

/// Notification body for an alert: headline plus the full status block.
pub fn render_alert(status: &SystemStatus) -> String {
    format!(
        "ALERT: room reads empty but a door/window is open\n\n{}",
        render_status(status)
    )
}

fn open_str(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}

fn occupancy_str(occupied: bool) -> &'static str {
    if occupied {
        "occupied (recent motion)"
    } else {
        "empty"
    }
}

/// Age of the last motion event relative to the snapshot's tick time.
/// The device has no synced wall clock, so ages are relative.
fn motion_age(status: &SystemStatus) -> String {
    match status.last_motion_ms {
        Some(t) => format!("{}s ago", status.last_change_ms.saturating_sub(t) / 1000),
        None => "-".to_string(),
    }
}

fn uptime_str(ms: u64) -> String {
    format!("uptime {}s", ms / 1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SystemStatus {
        SystemStatus {
            door_open: true,
            window_open: false,
            occupied: false,
            pir_raw: false,
            alert: true,
            last_motion_ms: Some(5_000),
            last_change_ms: 20_000,
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(Command::parse("STATUS"), Command::Status);
        assert_eq!(Command::parse("  Door \n"), Command::Door);
        assert_eq!(Command::parse("occupancy"), Command::Pir);
    }

    #[test]
    fn garbled_text_maps_to_help() {
        assert_eq!(Command::parse(""), Command::Help);
        assert_eq!(Command::parse("open sesame"), Command::Help);
        assert_eq!(respond(&sample(), "???"), HELP_TEXT);
    }

    #[test]
    fn single_field_replies() {
        let s = sample();
        assert_eq!(respond(&s, "door"), "door: open");
        assert_eq!(respond(&s, "window"), "window: closed");
        assert_eq!(respond(&s, "pir"), "room: empty");
    }

    #[test]
    fn status_block_contains_every_field() {
        let text = respond(&sample(), "status");
        assert!(text.contains("door: open"));
        assert!(text.contains("window: closed"));
        assert!(text.contains("room: empty"));
        assert!(text.contains("last motion: 15s ago"));
        assert!(text.contains("system: ALERT"));
        assert!(text.contains("updated: uptime 20s"));
    }

    #[test]
    fn no_motion_renders_dash() {
        let s = SystemStatus::default();
        assert!(render_status(&s).contains("last motion: -"));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let s = sample();
        assert_eq!(respond(&s, "status"), respond(&s, "status"));
    }

    #[test]
    fn alert_body_carries_the_status_block() {
        let body = render_alert(&sample());
        assert!(body.starts_with("ALERT:"));
        assert!(body.contains("door: open"));
    }
}
