use tauri::{AppHandle, Manager};
use tauri_plugin_updater::UpdaterExt;

use crate::{append_startup_log, AutoUpdateCheckState};

/// Fire-and-forget update check at startup. Every outcome is logged and
/// none of them is surfaced to the user or allowed to block startup.
pub(crate) fn spawn_update_check(app_handle: AppHandle) {
    tauri::async_runtime::spawn(async move {
        let enabled = app_handle
            .try_state::<AutoUpdateCheckState>()
            .map(|state| state.is_enabled())
            .unwrap_or(true);
        if !enabled {
            append_startup_log("automatic update check is disabled; skipping");
            return;
        }

        let current_version = app_handle.package_info().version.to_string();
        let updater = match app_handle.updater() {
            Ok(updater) => updater,
            Err(error) => {
                append_startup_log(&format!("failed to initialize updater: {error}"));
                return;
            }
        };

        match updater.check().await {
            Ok(Some(update)) => {
                append_startup_log(&format!(
                    "update available: current_version={} latest_version={}",
                    current_version, update.version
                ));
            }
            Ok(None) => {
                append_startup_log(&format!(
                    "no update available: current_version={current_version}"
                ));
            }
            Err(error) => {
                // First installs with no published release land here; that
                // is a normal condition, not a user-facing failure.
                append_startup_log(&format!(
                    "update check failed (silent): current_version={current_version} error={error}"
                ));
            }
        }
    });
}
