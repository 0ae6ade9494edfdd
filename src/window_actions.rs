use tauri::{AppHandle, Manager};

use crate::{main_window, tray_labels};

pub(crate) fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::show_main_window(app_handle, &log);
    tray_labels::update_tray_menu_labels_with_visibility(app_handle, Some(true), log);
}

pub(crate) fn hide_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::hide_main_window(app_handle, &log);
    tray_labels::update_tray_menu_labels_with_visibility(app_handle, Some(false), log);
}

pub(crate) fn toggle_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str) + Copy,
{
    let Some(window) = app_handle.get_webview_window(crate::MAIN_WINDOW_LABEL) else {
        log("toggle_main_window skipped: main window not found");
        return;
    };

    match window.is_visible() {
        Ok(true) => hide_main_window(app_handle, log),
        Ok(false) => show_main_window(app_handle, log),
        Err(error) => log(&format!(
            "failed to read main window visibility in toggle_main_window: {error}"
        )),
    }
}

pub(crate) fn reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::reload_main_window(app_handle, &log);
}

pub(crate) fn restore_and_focus_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::restore_and_focus_main_window(app_handle, &log);
    tray_labels::update_tray_menu_labels_with_visibility(app_handle, Some(true), log);
}
