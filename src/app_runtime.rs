use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    analytics, app_menu, append_desktop_log, append_shutdown_log, append_startup_log, exit_events,
    logging, main_window, page_style, runtime_paths, tray_setup, updater, window_actions,
    window_state, AutoUpdateCheckState, ShellState, DESKTOP_LOG_FILE, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    let root_dir = runtime_paths::shell_root_dir();
    let auto_update_check_enabled =
        window_state::read_auto_update_check(root_dir.as_deref()).unwrap_or(true);

    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(root_dir.as_deref(), DESKTOP_LOG_FILE).display()
    ));

    tauri::Builder::default()
        // Must be registered before any window exists: a second launch is
        // forwarded here and that process exits inside the plugin without
        // creating a window or running any further initialization.
        .plugin(tauri_plugin_single_instance::init(|app_handle, _args, _cwd| {
            append_desktop_log("second instance launch forwarded; focusing existing window");
            window_actions::restore_and_focus_main_window(app_handle, append_desktop_log);
        }))
        .plugin(tauri_plugin_updater::Builder::new().build())
        .manage(ShellState::default())
        .manage(AutoUpdateCheckState::new(auto_update_check_enabled))
        .invoke_handler(tauri::generate_handler![])
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::CloseRequested { api, .. } = event {
                let app_handle = window.app_handle();
                let state = app_handle.state::<ShellState>();
                if state.is_quitting() {
                    return;
                }

                // Close hides; the process keeps running in the background.
                api.prevent_close();
                window_actions::hide_main_window(app_handle, append_desktop_log);
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                if webview.window().label() != MAIN_WINDOW_LABEL {
                    return;
                }
                // Style first, reveal second, so the window never flashes
                // the unstyled page.
                page_style::inject_shell_stylesheet(&webview);
                window_actions::show_main_window(webview.app_handle(), append_desktop_log);
            }
        })
        .on_menu_event(|app_handle, event| {
            app_menu::handle_menu_event(app_handle, event.id().as_ref())
        })
        .setup(move |app| {
            let app_handle = app.handle().clone();

            analytics::init();

            if let Err(error) = app_menu::setup_application_menu(&app_handle) {
                append_startup_log(&format!("failed to install application menu: {error}"));
            }
            if let Err(error) = tray_setup::setup_tray(&app_handle) {
                append_startup_log(&format!("failed to initialize tray: {error}"));
            }

            main_window::create_main_window(&app_handle)?;
            append_startup_log("main window created, waiting for page load");

            updater::spawn_update_check(app_handle);

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { .. } => {
                exit_events::handle_exit_requested(app_handle);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                window_actions::show_main_window(app_handle, append_desktop_log);
            }
            RunEvent::Exit => {
                append_shutdown_log("desktop process exiting");
            }
            _ => {}
        });
}
