use tauri::{menu::MenuItem, AppHandle, Manager};

use crate::{tray_actions, AutoUpdateCheckState, TrayMenuState, MAIN_WINDOW_LABEL};

pub(crate) const TRAY_LABEL_HIDE: &str = "Hide Inboxer";
pub(crate) const TRAY_LABEL_SHOW: &str = "Show Inboxer";
pub(crate) const TRAY_LABEL_RELOAD: &str = "Reload";
pub(crate) const TRAY_LABEL_AUTO_UPDATE_CHECK_ON: &str = "Automatic Update Check: On";
pub(crate) const TRAY_LABEL_AUTO_UPDATE_CHECK_OFF: &str = "Automatic Update Check: Off";
pub(crate) const TRAY_LABEL_QUIT: &str = "Quit";

pub(crate) fn toggle_label_for_visibility(visible: bool) -> &'static str {
    if visible {
        TRAY_LABEL_HIDE
    } else {
        TRAY_LABEL_SHOW
    }
}

pub(crate) fn auto_update_check_label(enabled: bool) -> &'static str {
    if enabled {
        TRAY_LABEL_AUTO_UPDATE_CHECK_ON
    } else {
        TRAY_LABEL_AUTO_UPDATE_CHECK_OFF
    }
}

fn set_menu_text_safe<F>(item: &MenuItem<tauri::Wry>, text: &str, item_name: &str, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = item.set_text(text) {
        log(&format!(
            "failed to update tray menu text for {}: {}",
            item_name, error
        ));
    }
}

pub(crate) fn update_tray_menu_labels<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    update_tray_menu_labels_with_visibility(app_handle, None, log);
}

pub(crate) fn update_tray_menu_labels_with_visibility<F>(
    app_handle: &AppHandle,
    visible_override: Option<bool>,
    log: F,
) where
    F: Fn(&str),
{
    let Some(tray_state) = app_handle.try_state::<TrayMenuState>() else {
        return;
    };

    let effective_visible = if let Some(visible) = visible_override {
        visible
    } else {
        app_handle
            .get_webview_window(MAIN_WINDOW_LABEL)
            .and_then(|window| window.is_visible().ok())
            .unwrap_or(true)
    };
    let auto_update_check_enabled = app_handle
        .try_state::<AutoUpdateCheckState>()
        .map(|state| state.is_enabled())
        .unwrap_or(true);

    set_menu_text_safe(
        &tray_state.toggle_item,
        toggle_label_for_visibility(effective_visible),
        tray_actions::TRAY_MENU_TOGGLE_WINDOW,
        &log,
    );
    set_menu_text_safe(
        &tray_state.reload_item,
        TRAY_LABEL_RELOAD,
        tray_actions::TRAY_MENU_RELOAD_WINDOW,
        &log,
    );
    set_menu_text_safe(
        &tray_state.auto_update_check_item,
        auto_update_check_label(auto_update_check_enabled),
        tray_actions::TRAY_MENU_TOGGLE_AUTO_UPDATE_CHECK,
        &log,
    );
    set_menu_text_safe(
        &tray_state.quit_item,
        TRAY_LABEL_QUIT,
        tray_actions::TRAY_MENU_QUIT,
        &log,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_reflects_visibility() {
        assert_eq!(toggle_label_for_visibility(true), TRAY_LABEL_HIDE);
        assert_eq!(toggle_label_for_visibility(false), TRAY_LABEL_SHOW);
    }

    #[test]
    fn auto_update_check_label_reflects_flag() {
        assert_eq!(auto_update_check_label(true), TRAY_LABEL_AUTO_UPDATE_CHECK_ON);
        assert_eq!(
            auto_update_check_label(false),
            TRAY_LABEL_AUTO_UPDATE_CHECK_OFF
        );
    }
}
