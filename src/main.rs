//! RoomSentry Firmware — Main Entry Point
//!
//! Hexagonal architecture with a fixed-cadence poll loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter   LogEventSink    NvsAdapter                │
//! │  (SensorPort)      (EventSink)     (Config+Storage)          │
//! │  ChannelNotifier   command_server  MonotonicTime             │
//! │  (NotifierPort)    (TCP console)   (clock)                   │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ────────────────        │
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐    │
//! │  │            MonitorService (pure logic)               │    │
//! │  │  debounce · occupancy window · alert gate            │    │
//! │  └──────────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Three threads: the poll loop (here), the notification worker, and the
//! TCP command console.  They share exactly one thing — the
//! [`StatusCell`] snapshot.
#![deny(unused_must_use)]

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use roomsentry::adapters::command_server;
use roomsentry::adapters::hardware::HardwareAdapter;
use roomsentry::adapters::log_sink::LogEventSink;
use roomsentry::adapters::notify::{self, LogNotifier};
use roomsentry::adapters::nvs::NvsAdapter;
use roomsentry::adapters::time::MonotonicTime;
use roomsentry::app::ports::{ConfigPort, NotifierPort};
use roomsentry::app::service::MonitorService;
use roomsentry::config::SystemConfig;
use roomsentry::drivers;
use roomsentry::pins;
use roomsentry::sensors::pir::{self, PirSensor};
use roomsentry::sensors::reed::{ReedChannel, ReedSwitch};
use roomsentry::sensors::SensorHub;
use roomsentry::status::StatusCell;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    info!("╔══════════════════════════════════════╗");
    info!("║  RoomSentry v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = drivers::watchdog::Watchdog::new();

    // ── 3. Load config from NVS (or defaults) ─────────────────
    let nvs = match NvsAdapter::new() {
        Ok(n) => n,
        Err(e) => {
            warn!("NVS init failed ({}), running with defaults and no persistence", e);
            NvsAdapter::default()
        }
    };
    let config = match nvs.load() {
        Ok(cfg) => {
            info!("Config loaded from NVS");
            cfg
        }
        Err(e) => {
            warn!("NVS config load failed ({}), using defaults", e);
            SystemConfig::default()
        }
    };

    // ── 4. Construct adapters ─────────────────────────────────
    let hub = SensorHub::new(
        ReedSwitch::new(pins::DOOR_GPIO, ReedChannel::Door),
        ReedSwitch::new(pins::WINDOW_GPIO, ReedChannel::Window),
        PirSensor::new(pins::PIR_GPIO),
    );
    let mut hw = HardwareAdapter::new(hub);
    let mut log_sink = LogEventSink::new();
    let time = MonotonicTime::new();

    info!(
        "PIR warm-up: readings unreliable for the first {}s after power-up",
        pir::WARMUP_SECS
    );

    // ── 5. Notification pipeline ──────────────────────────────
    // Webhook URL is provisioned out of band into NVS; without it the
    // alerts go to the serial log only.
    let mut notifier = match nvs.notify_url() {
        #[cfg(target_os = "espidf")]
        Some(url) => {
            info!("Notifications: webhook configured");
            match notify::HttpNotifier::new(&url) {
                Ok(http) => notify::spawn_notifier_thread(http),
                Err(e) => {
                    warn!("Notifications: bad webhook URL ({}), falling back to log", e);
                    notify::spawn_notifier_thread(LogNotifier)
                }
            }
        }
        #[cfg(not(target_os = "espidf"))]
        Some(_) => notify::spawn_notifier_thread(LogNotifier),
        None => {
            info!("Notifications: no webhook URL in NVS, logging alerts only");
            notify::spawn_notifier_thread(LogNotifier)
        }
    };

    // ── 6. Shared snapshot + command console ──────────────────
    let cell = Arc::new(StatusCell::new());
    if let Err(e) = command_server::spawn(Arc::clone(&cell), command_server::DEFAULT_PORT) {
        // The monitor still protects the room without a console.
        warn!("command console unavailable: {}", e);
    }

    // ── 7. Construct the monitor service ──────────────────────
    let mut app = MonitorService::new(config.clone());
    app.start(&mut log_sink);

    info!("System ready. Entering poll loop.");

    // ── 8. Poll loop ──────────────────────────────────────────
    let poll_interval = Duration::from_millis(u64::from(config.poll_interval_ms));

    loop {
        thread::sleep(poll_interval);
        let now_ms = time.now_ms();

        let alert = app.tick(&mut hw, now_ms, &mut log_sink);

        // Publish before dispatching: a query racing the alert must
        // already see the snapshot that raised it.
        cell.publish(app.status());

        if let Some(event) = alert {
            notifier.notify(&event.message);
        }

        watchdog.feed();
    }
}
