pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Inboxer";

/// The embedded page is always loaded from this URL; it is not configurable.
pub(crate) const MAIN_URL: &str = "https://inbox.google.com/";

pub(crate) const MIN_WINDOW_WIDTH: f64 = 890.0;
pub(crate) const MIN_WINDOW_HEIGHT: f64 = 400.0;
pub(crate) const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub(crate) const DEFAULT_WINDOW_HEIGHT: u32 = 800;

pub(crate) const SHELL_ROOT_ENV: &str = "INBOXER_ROOT";
pub(crate) const DESKTOP_STATE_FILE: &str = "desktop_state.json";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";

pub(crate) const TRAY_ID: &str = "inboxer-tray";

pub(crate) const EVENT_WILL_NAVIGATE: &str = "will-navigate";
pub(crate) const EVENT_NEW_WINDOW: &str = "new-window";
pub(crate) const EVENT_QUIT: &str = "quit";
