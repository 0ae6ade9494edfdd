use tauri::{
    webview::NewWindowResponse, AppHandle, Manager, WebviewUrl, WebviewWindow,
    WebviewWindowBuilder,
};
use url::Url;

use crate::{
    analytics, download_handler, external_browser,
    navigation_policy::{self, NavigationTarget},
    runtime_paths, window_state, EVENT_NEW_WINDOW, EVENT_WILL_NAVIGATE, MAIN_URL,
    MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

/// Builds the single shell window: persisted bounds, minimum size, hidden
/// until the page has loaded, with the navigation policy attached. This is
/// the only place a window is ever created.
pub(crate) fn create_main_window(app_handle: &AppHandle) -> Result<WebviewWindow, String> {
    let root_dir = runtime_paths::shell_root_dir();
    let state = window_state::read_window_state(root_dir.as_deref()).unwrap_or_default();
    let always_on_top = window_state::read_always_on_top(root_dir.as_deref()).unwrap_or(false);
    let (width, height) = state.restore_size();

    let main_url = Url::parse(MAIN_URL)
        .map_err(|error| format!("Failed to parse embedded page URL {MAIN_URL}: {error}"))?;

    let popup_handle = app_handle.clone();

    let mut builder = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::External(main_url),
    )
    .title(MAIN_WINDOW_TITLE)
    .inner_size(width, height)
    .min_inner_size(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
    .resizable(true)
    .visible(false)
    .always_on_top(always_on_top)
    .on_navigation(handle_page_navigation)
    .on_new_window(move |url, _features| handle_new_window_request(&popup_handle, url.clone()))
    .on_download(download_handler::handle_download);

    builder = builder
        .icon(tauri::include_image!("./icons/icon.png"))
        .map_err(|error| format!("Failed to set main window icon: {error}"))?;

    if let (Some(x), Some(y)) = (state.x, state.y) {
        builder = builder.position(f64::from(x), f64::from(y));
    }

    #[cfg(target_os = "macos")]
    {
        builder = builder
            .title_bar_style(tauri::TitleBarStyle::Overlay)
            .hidden_title(true);
    }

    builder
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))
}

/// In-page navigation attempt. Allowed targets proceed in the shell;
/// everything else is cancelled and handed to the system browser.
fn handle_page_navigation(url: &Url) -> bool {
    analytics::track(EVENT_WILL_NAVIGATE);
    match navigation_policy::decide_navigation_target(url.as_str()) {
        NavigationTarget::Shell => true,
        NavigationTarget::ExternalBrowser => {
            crate::append_desktop_log(&format!(
                "blocked in-shell navigation to {url}; opening externally"
            ));
            external_browser::open_external(url.as_str());
            false
        }
    }
}

/// `window.open` request. The shell never creates a second native window:
/// allowed targets replace the current page, the rest go to the browser.
fn handle_new_window_request(app_handle: &AppHandle, url: Url) -> NewWindowResponse<tauri::Wry> {
    analytics::track(EVENT_NEW_WINDOW);
    match navigation_policy::decide_navigation_target(url.as_str()) {
        NavigationTarget::Shell => {
            if let Some(mut window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
                if let Err(error) = window.navigate(url) {
                    crate::append_desktop_log(&format!(
                        "failed to load allowed popup target in shell: {error}"
                    ));
                }
            }
        }
        NavigationTarget::ExternalBrowser => {
            external_browser::open_external(url.as_str());
        }
    }
    NewWindowResponse::Deny
}

fn with_main_window<F>(app_handle: &AppHandle, log: &F, action_name: &str) -> Option<WebviewWindow>
where
    F: Fn(&str) + ?Sized,
{
    let window = app_handle.get_webview_window(MAIN_WINDOW_LABEL);
    if window.is_none() {
        log(&format!("{action_name} skipped: main window not found"));
    }
    window
}

pub(crate) fn show_main_window<F>(app_handle: &AppHandle, log: &F)
where
    F: Fn(&str) + ?Sized,
{
    let Some(window) = with_main_window(app_handle, log, "show_main_window") else {
        return;
    };
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
}

pub(crate) fn hide_main_window<F>(app_handle: &AppHandle, log: &F)
where
    F: Fn(&str) + ?Sized,
{
    let Some(window) = with_main_window(app_handle, log, "hide_main_window") else {
        return;
    };
    if let Err(error) = window.hide() {
        log(&format!("failed to hide main window: {error}"));
    }
}

pub(crate) fn reload_main_window<F>(app_handle: &AppHandle, log: &F)
where
    F: Fn(&str) + ?Sized,
{
    let Some(window) = with_main_window(app_handle, log, "reload_main_window") else {
        return;
    };
    if let Err(error) = window.eval("window.location.reload()") {
        log(&format!("failed to reload main window: {error}"));
    }
}

/// Re-show path for the activate/reopen signal and for a forwarded second
/// instance launch: un-minimize if needed, then show and focus.
pub(crate) fn restore_and_focus_main_window<F>(app_handle: &AppHandle, log: &F)
where
    F: Fn(&str) + ?Sized,
{
    let Some(window) = with_main_window(app_handle, log, "restore_and_focus_main_window") else {
        return;
    };
    if window.is_minimized().unwrap_or(false) {
        if let Err(error) = window.unminimize() {
            log(&format!("failed to unminimize main window: {error}"));
        }
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}
