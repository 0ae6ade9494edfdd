use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle, Manager,
};

use crate::{
    append_desktop_log, tray_actions, tray_labels, tray_menu_handler, window_actions,
    AutoUpdateCheckState, TrayMenuState, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE, TRAY_ID,
};

pub(crate) fn setup_tray(app_handle: &AppHandle) -> Result<(), String> {
    let main_window_visible = app_handle
        .get_webview_window(MAIN_WINDOW_LABEL)
        .and_then(|window| window.is_visible().ok())
        .unwrap_or(true);
    let auto_update_check_enabled = app_handle
        .try_state::<AutoUpdateCheckState>()
        .map(|state| state.is_enabled())
        .unwrap_or(true);

    let toggle_item = MenuItem::with_id(
        app_handle,
        tray_actions::TRAY_MENU_TOGGLE_WINDOW,
        tray_labels::toggle_label_for_visibility(main_window_visible),
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create tray toggle menu item: {error}"))?;
    let reload_item = MenuItem::with_id(
        app_handle,
        tray_actions::TRAY_MENU_RELOAD_WINDOW,
        tray_labels::TRAY_LABEL_RELOAD,
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create tray reload menu item: {error}"))?;
    let auto_update_check_item = MenuItem::with_id(
        app_handle,
        tray_actions::TRAY_MENU_TOGGLE_AUTO_UPDATE_CHECK,
        tray_labels::auto_update_check_label(auto_update_check_enabled),
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create tray auto update menu item: {error}"))?;
    let quit_item = MenuItem::with_id(
        app_handle,
        tray_actions::TRAY_MENU_QUIT,
        tray_labels::TRAY_LABEL_QUIT,
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create tray quit menu item: {error}"))?;
    let separator = PredefinedMenuItem::separator(app_handle)
        .map_err(|error| format!("Failed to create tray separator menu item: {error}"))?;

    let menu = Menu::with_items(
        app_handle,
        &[
            &toggle_item,
            &reload_item,
            &auto_update_check_item,
            &separator,
            &quit_item,
        ],
    )
    .map_err(|error| format!("Failed to build tray menu: {error}"))?;

    if !app_handle.manage(TrayMenuState {
        toggle_item: toggle_item.clone(),
        reload_item: reload_item.clone(),
        auto_update_check_item: auto_update_check_item.clone(),
        quit_item: quit_item.clone(),
    }) {
        append_desktop_log("tray menu state already exists, skipping manage");
    }

    let tray_builder = TrayIconBuilder::with_id(TRAY_ID)
        .menu(&menu)
        .tooltip(MAIN_WINDOW_TITLE)
        .icon(tauri::include_image!("./icons/tray.png"))
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| {
            tray_menu_handler::handle_tray_menu_event(app, event.id().as_ref())
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                tray_labels::update_tray_menu_labels(tray.app_handle(), append_desktop_log);
                if button == MouseButton::Left {
                    window_actions::toggle_main_window(tray.app_handle(), append_desktop_log);
                }
            }
        });

    #[cfg(target_os = "macos")]
    let tray_builder = tray_builder.icon_as_template(true);

    tray_builder
        .build(app_handle)
        .map_err(|error| format!("Failed to create tray icon: {error}"))?;

    tray_labels::update_tray_menu_labels(app_handle, append_desktop_log);
    Ok(())
}
