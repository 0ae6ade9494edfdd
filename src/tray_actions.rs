pub(crate) const TRAY_MENU_TOGGLE_WINDOW: &str = "tray_toggle_window";
pub(crate) const TRAY_MENU_RELOAD_WINDOW: &str = "tray_reload_window";
pub(crate) const TRAY_MENU_TOGGLE_AUTO_UPDATE_CHECK: &str = "tray_toggle_auto_update_check";
pub(crate) const TRAY_MENU_QUIT: &str = "tray_quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrayMenuAction {
    ToggleWindow,
    ReloadWindow,
    ToggleAutoUpdateCheck,
    Quit,
}

pub(crate) fn action_from_menu_id(menu_id: &str) -> Option<TrayMenuAction> {
    match menu_id {
        TRAY_MENU_TOGGLE_WINDOW => Some(TrayMenuAction::ToggleWindow),
        TRAY_MENU_RELOAD_WINDOW => Some(TrayMenuAction::ReloadWindow),
        TRAY_MENU_TOGGLE_AUTO_UPDATE_CHECK => Some(TrayMenuAction::ToggleAutoUpdateCheck),
        TRAY_MENU_QUIT => Some(TrayMenuAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        assert_eq!(
            action_from_menu_id(TRAY_MENU_TOGGLE_WINDOW),
            Some(TrayMenuAction::ToggleWindow)
        );
        assert_eq!(
            action_from_menu_id(TRAY_MENU_RELOAD_WINDOW),
            Some(TrayMenuAction::ReloadWindow)
        );
        assert_eq!(
            action_from_menu_id(TRAY_MENU_TOGGLE_AUTO_UPDATE_CHECK),
            Some(TrayMenuAction::ToggleAutoUpdateCheck)
        );
        assert_eq!(
            action_from_menu_id(TRAY_MENU_QUIT),
            Some(TrayMenuAction::Quit)
        );
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
    }
}
