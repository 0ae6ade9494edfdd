#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod analytics;
mod app_constants;
mod app_menu;
mod app_runtime;
mod app_types;
mod download_handler;
mod exit_events;
mod external_browser;
mod logging;
mod main_window;
mod navigation_policy;
mod page_style;
mod runtime_paths;
mod tray_actions;
mod tray_labels;
mod tray_menu_handler;
mod tray_setup;
mod updater;
mod url_glob;
mod window_actions;
mod window_state;

pub(crate) use app_constants::*;
pub(crate) use app_types::{AutoUpdateCheckState, ShellState, TrayMenuState, WindowState};
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};

fn main() {
    app_runtime::run();
}
