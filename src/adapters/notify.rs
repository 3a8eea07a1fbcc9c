//! Notification adapters.
//!
//! Three implementations of [`NotifierPort`]:
//!
//! - [`LogNotifier`] — writes the alert text to the log.  Always
//!   available; the fallback when no webhook URL is provisioned.
//! - [`HttpNotifier`] — POSTs a JSON body to the provisioned webhook
//!   URL (espidf only).  Failures are logged and dropped, never retried:
//!   the next alert past the cooldown is the retry.
//! - [`ChannelNotifier`] — hands the text to a dedicated worker thread
//!   over an mpsc channel so network latency never stalls the poll loop.

use crate::app::ports::NotifierPort;
use log::{info, warn};
use std::sync::mpsc;
use std::thread;

/// Notifier that writes alerts to the serial log.
pub struct LogNotifier;

impl NotifierPort for LogNotifier {
    fn notify(&mut self, text: &str) {
        for line in text.lines() {
            warn!("NOTIFY| {}", line);
        }
    }
}

/// Notifier that POSTs `{"text": ...}` to a webhook endpoint.
#[cfg(target_os = "espidf")]
pub struct HttpNotifier {
    url: std::ffi::CString,
}

#[cfg(target_os = "espidf")]
impl HttpNotifier {
    pub fn new(url: &str) -> crate::error::Result<Self> {
        let url = std::ffi::CString::new(url)
            .map_err(|_| crate::error::Error::Config("webhook URL contains NUL"))?;
        Ok(Self { url })
    }

    fn post(&self, text: &str) -> Result<(), crate::error::NotifyError> {
        use crate::error::NotifyError;
        use esp_idf_svc::sys::*;

        let body = serde_json::to_vec(&serde_json::json!({ "text": text }))
            .map_err(|_| NotifyError::RequestFailed)?;

        let config = esp_http_client_config_t {
            url: self.url.as_ptr(),
            method: esp_http_client_method_t_HTTP_METHOD_POST,
            timeout_ms: 10_000,
            crt_bundle_attach: Some(esp_crt_bundle_attach),
            ..Default::default()
        };

        // SAFETY: handle is used on this thread only and cleaned up on
        // every exit path below.
        unsafe {
            let client = esp_http_client_init(&config);
            if client.is_null() {
                return Err(NotifyError::RequestFailed);
            }

            let result = (|| {
                if esp_http_client_set_header(
                    client,
                    c"Content-Type".as_ptr(),
                    c"application/json".as_ptr(),
                ) != ESP_OK
                {
                    return Err(NotifyError::RequestFailed);
                }
                if esp_http_client_set_post_field(
                    client,
                    body.as_ptr() as *const _,
                    body.len() as i32,
                ) != ESP_OK
                {
                    return Err(NotifyError::RequestFailed);
                }
                if esp_http_client_perform(client) != ESP_OK {
                    return Err(NotifyError::RequestFailed);
                }
                let status = esp_http_client_get_status_code(client);
                if !(200..300).contains(&status) {
                    return Err(NotifyError::Rejected(status as u16));
                }
                Ok(())
            })();

            esp_http_client_cleanup(client);
            result
        }
    }
}

#[cfg(target_os = "espidf")]
impl NotifierPort for HttpNotifier {
    fn notify(&mut self, text: &str) {
        match self.post(text) {
            Ok(()) => info!("NOTIFY| webhook delivery ok"),
            Err(e) => warn!("NOTIFY| webhook delivery failed: {}", e),
        }
    }
}

/// Front half of the decoupled notification pipeline: `notify()` only
/// enqueues, so the caller (the poll loop) never blocks on the network.
pub struct ChannelNotifier {
    tx: mpsc::Sender<String>,
}

impl NotifierPort for ChannelNotifier {
    fn notify(&mut self, text: &str) {
        // A closed channel means the worker died; drop the alert rather
        // than stall the tick.
        if self.tx.send(text.to_string()).is_err() {
            warn!("NOTIFY| worker thread gone, alert dropped");
        }
    }
}

/// Spawn the notification worker and return the enqueue-side notifier.
///
/// The worker owns the real transport and drains the channel until all
/// senders are dropped.
pub fn spawn_notifier_thread(
    mut transport: impl NotifierPort + Send + 'static,
) -> ChannelNotifier {
    let (tx, rx) = mpsc::channel::<String>();
    thread::Builder::new()
        .name("notifier".into())
        .stack_size(8 * 1024)
        .spawn(move || {
            for text in rx {
                transport.notify(&text);
            }
            info!("notifier thread exiting");
        })
        .ok();
    ChannelNotifier { tx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingTransport(Arc<Mutex<Vec<String>>>);

    impl NotifierPort for RecordingTransport {
        fn notify(&mut self, text: &str) {
            self.0.lock().unwrap().push(text.to_string());
        }
    }

    #[test]
    fn channel_notifier_delivers_through_worker() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = spawn_notifier_thread(RecordingTransport(seen.clone()));

        notifier.notify("first");
        notifier.notify("second");
        drop(notifier);

        // Worker drains the channel before exiting; give it a moment.
        for _ in 0..50 {
            if seen.lock().unwrap().len() == 2 {
                break;
            }
            thread::sleep(core::time::Duration::from_millis(10));
        }
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn log_notifier_accepts_multiline_text() {
        let mut n = LogNotifier;
        n.notify("line one\nline two");
    }
}
