use tauri::{AppHandle, Manager};

use crate::{
    analytics, append_desktop_log, append_shutdown_log, runtime_paths, window_state, ShellState,
    WindowState, EVENT_QUIT, MAIN_WINDOW_LABEL,
};

/// Process-wide before-quit transition. Runs once: flips the quit flag so
/// the pending window close is allowed through, records the quit event,
/// and snapshots the window bounds for the next launch.
pub(crate) fn handle_exit_requested(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    if !state.mark_quitting() {
        return;
    }

    analytics::track(EVENT_QUIT);
    append_shutdown_log("exit requested, persisting window state");
    persist_window_bounds(app_handle);
}

/// Snapshots the current bounds into the state store. A full-screen window
/// is skipped so its dimensions never become the restore size.
fn persist_window_bounds(app_handle: &AppHandle) {
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        append_desktop_log("window state snapshot skipped: main window not found");
        return;
    };

    if window.is_fullscreen().unwrap_or(false) {
        append_desktop_log("window state snapshot skipped: window is full-screen");
        return;
    }

    let scale_factor = window.scale_factor().unwrap_or(1.0);
    let (position, size) = match (window.outer_position(), window.inner_size()) {
        (Ok(position), Ok(size)) => (
            position.to_logical::<f64>(scale_factor),
            size.to_logical::<f64>(scale_factor),
        ),
        (position, size) => {
            append_desktop_log(&format!(
                "window state snapshot skipped: position={:?} size={:?}",
                position.err(),
                size.err()
            ));
            return;
        }
    };

    let snapshot = WindowState {
        x: Some(position.x.round() as i32),
        y: Some(position.y.round() as i32),
        width: size.width.round() as u32,
        height: size.height.round() as u32,
    };

    let root_dir = runtime_paths::shell_root_dir();
    if let Err(error) = window_state::write_window_state(&snapshot, root_dir.as_deref()) {
        append_desktop_log(&format!("failed to persist window state: {error}"));
    }
}
