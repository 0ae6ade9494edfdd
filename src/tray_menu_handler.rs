use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, append_shutdown_log, runtime_paths, tray_actions, tray_labels,
    window_actions, window_state, AutoUpdateCheckState,
};

pub(crate) fn handle_tray_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match tray_actions::action_from_menu_id(menu_id) {
        Some(tray_actions::TrayMenuAction::ToggleWindow) => {
            window_actions::toggle_main_window(app_handle, append_desktop_log)
        }
        Some(tray_actions::TrayMenuAction::ReloadWindow) => {
            window_actions::reload_main_window(app_handle, append_desktop_log)
        }
        Some(tray_actions::TrayMenuAction::ToggleAutoUpdateCheck) => {
            let auto_update_state = app_handle.state::<AutoUpdateCheckState>();
            let enabled = auto_update_state.toggle();
            let root_dir = runtime_paths::shell_root_dir();
            match window_state::write_auto_update_check(enabled, root_dir.as_deref()) {
                Ok(()) => {
                    append_desktop_log(&format!(
                        "tray toggled automatic update check: {}",
                        if enabled { "enabled" } else { "disabled" }
                    ));
                }
                Err(error) => {
                    append_desktop_log(&format!(
                        "failed to persist automatic update check setting: {error}"
                    ));
                }
            }
            tray_labels::update_tray_menu_labels(app_handle, append_desktop_log);
        }
        Some(tray_actions::TrayMenuAction::Quit) => {
            append_shutdown_log("tray quit requested, exiting desktop process");
            app_handle.exit(0);
        }
        None => {}
    }
}
