use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle,
};

use crate::{append_desktop_log, append_shutdown_log, window_actions};

pub(crate) const MENU_RELOAD_PAGE: &str = "menu_reload_page";
pub(crate) const MENU_QUIT: &str = "menu_quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    ReloadPage,
    Quit,
}

pub(crate) fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_RELOAD_PAGE => Some(MenuAction::ReloadPage),
        MENU_QUIT => Some(MenuAction::Quit),
        _ => None,
    }
}

/// Builds and installs the static application menu. Standard entries use
/// the platform-predefined items; only Reload and Quit are custom.
pub(crate) fn setup_application_menu(app_handle: &AppHandle) -> Result<(), String> {
    let menu = Menu::new(app_handle)
        .map_err(|error| format!("Failed to create application menu: {error}"))?;

    #[cfg(target_os = "macos")]
    {
        let about = PredefinedMenuItem::about(app_handle, None, None)
            .map_err(|error| format!("Failed to create about menu item: {error}"))?;
        let hide = PredefinedMenuItem::hide(app_handle, None)
            .map_err(|error| format!("Failed to create hide menu item: {error}"))?;
        let hide_others = PredefinedMenuItem::hide_others(app_handle, None)
            .map_err(|error| format!("Failed to create hide-others menu item: {error}"))?;
        let show_all = PredefinedMenuItem::show_all(app_handle, None)
            .map_err(|error| format!("Failed to create show-all menu item: {error}"))?;
        let about_separator = PredefinedMenuItem::separator(app_handle)
            .map_err(|error| format!("Failed to create menu separator: {error}"))?;
        let quit_separator = PredefinedMenuItem::separator(app_handle)
            .map_err(|error| format!("Failed to create menu separator: {error}"))?;
        let quit_item = quit_menu_item(app_handle)?;
        let app_submenu = Submenu::with_items(
            app_handle,
            crate::MAIN_WINDOW_TITLE,
            true,
            &[
                &about,
                &about_separator,
                &hide,
                &hide_others,
                &show_all,
                &quit_separator,
                &quit_item,
            ],
        )
        .map_err(|error| format!("Failed to build application submenu: {error}"))?;
        menu.append(&app_submenu)
            .map_err(|error| format!("Failed to append application submenu: {error}"))?;
    }

    #[cfg(not(target_os = "macos"))]
    {
        let quit_item = quit_menu_item(app_handle)?;
        let file_submenu = Submenu::with_items(app_handle, "File", true, &[&quit_item])
            .map_err(|error| format!("Failed to build file submenu: {error}"))?;
        menu.append(&file_submenu)
            .map_err(|error| format!("Failed to append file submenu: {error}"))?;
    }

    let undo = PredefinedMenuItem::undo(app_handle, None)
        .map_err(|error| format!("Failed to create undo menu item: {error}"))?;
    let redo = PredefinedMenuItem::redo(app_handle, None)
        .map_err(|error| format!("Failed to create redo menu item: {error}"))?;
    let cut = PredefinedMenuItem::cut(app_handle, None)
        .map_err(|error| format!("Failed to create cut menu item: {error}"))?;
    let copy = PredefinedMenuItem::copy(app_handle, None)
        .map_err(|error| format!("Failed to create copy menu item: {error}"))?;
    let paste = PredefinedMenuItem::paste(app_handle, None)
        .map_err(|error| format!("Failed to create paste menu item: {error}"))?;
    let select_all = PredefinedMenuItem::select_all(app_handle, None)
        .map_err(|error| format!("Failed to create select-all menu item: {error}"))?;
    let edit_separator = PredefinedMenuItem::separator(app_handle)
        .map_err(|error| format!("Failed to create menu separator: {error}"))?;
    let edit_submenu = Submenu::with_items(
        app_handle,
        "Edit",
        true,
        &[&undo, &redo, &edit_separator, &cut, &copy, &paste, &select_all],
    )
    .map_err(|error| format!("Failed to build edit submenu: {error}"))?;
    menu.append(&edit_submenu)
        .map_err(|error| format!("Failed to append edit submenu: {error}"))?;

    let reload_item = MenuItem::with_id(
        app_handle,
        MENU_RELOAD_PAGE,
        "Reload",
        true,
        Some("CmdOrCtrl+R"),
    )
    .map_err(|error| format!("Failed to create reload menu item: {error}"))?;
    let fullscreen = PredefinedMenuItem::fullscreen(app_handle, None)
        .map_err(|error| format!("Failed to create fullscreen menu item: {error}"))?;
    let view_submenu = Submenu::with_items(app_handle, "View", true, &[&reload_item, &fullscreen])
        .map_err(|error| format!("Failed to build view submenu: {error}"))?;
    menu.append(&view_submenu)
        .map_err(|error| format!("Failed to append view submenu: {error}"))?;

    let minimize = PredefinedMenuItem::minimize(app_handle, None)
        .map_err(|error| format!("Failed to create minimize menu item: {error}"))?;
    let close_window = PredefinedMenuItem::close_window(app_handle, None)
        .map_err(|error| format!("Failed to create close-window menu item: {error}"))?;
    let window_submenu = Submenu::with_items(app_handle, "Window", true, &[&minimize, &close_window])
        .map_err(|error| format!("Failed to build window submenu: {error}"))?;
    menu.append(&window_submenu)
        .map_err(|error| format!("Failed to append window submenu: {error}"))?;

    app_handle
        .set_menu(menu)
        .map_err(|error| format!("Failed to install application menu: {error}"))?;
    Ok(())
}

fn quit_menu_item(app_handle: &AppHandle) -> Result<MenuItem<tauri::Wry>, String> {
    MenuItem::with_id(app_handle, MENU_QUIT, "Quit", true, Some("CmdOrCtrl+Q"))
        .map_err(|error| format!("Failed to create quit menu item: {error}"))
}

/// Dispatch for the custom menu entries. Tray menu ids and predefined
/// items fall through `action_from_menu_id` and are ignored here.
pub(crate) fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match action_from_menu_id(menu_id) {
        Some(MenuAction::ReloadPage) => {
            window_actions::reload_main_window(app_handle, append_desktop_log)
        }
        Some(MenuAction::Quit) => {
            append_shutdown_log("menu quit requested, exiting desktop process");
            app_handle.exit(0);
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        assert_eq!(
            action_from_menu_id(MENU_RELOAD_PAGE),
            Some(MenuAction::ReloadPage)
        );
        assert_eq!(action_from_menu_id(MENU_QUIT), Some(MenuAction::Quit));
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_and_tray_ids() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
        assert_eq!(action_from_menu_id("tray_toggle_window"), None);
    }
}
