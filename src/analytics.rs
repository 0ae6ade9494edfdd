//! Best-effort usage telemetry. Events are appended to the desktop log;
//! nothing here may fail the caller or block an event-loop callback.

use crate::append_desktop_log;

pub(crate) fn init() {
    append_desktop_log(&format!(
        "[analytics] session started: v{} on {}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    ));
}

pub(crate) fn track(event_name: &str) {
    append_desktop_log(&format!("[analytics] event: {event_name}"));
}
