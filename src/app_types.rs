use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tauri::menu::MenuItem;

use crate::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

/// Process-lifetime shell state. `is_quitting` flips from false to true
/// exactly once, on the exit request, and gates whether a window close
/// request hides the window or lets it be destroyed.
#[derive(Debug, Default)]
pub(crate) struct ShellState {
    is_quitting: AtomicBool,
}

impl ShellState {
    pub(crate) fn is_quitting(&self) -> bool {
        self.is_quitting.load(Ordering::Relaxed)
    }

    /// Returns true on the first call only.
    pub(crate) fn mark_quitting(&self) -> bool {
        !self.is_quitting.swap(true, Ordering::Relaxed)
    }
}

#[derive(Debug)]
pub(crate) struct AutoUpdateCheckState {
    enabled: AtomicBool,
}

impl AutoUpdateCheckState {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub(crate) fn toggle(&self) -> bool {
        !self.enabled.fetch_xor(true, Ordering::Relaxed)
    }
}

#[derive(Clone)]
pub(crate) struct TrayMenuState {
    pub(crate) toggle_item: MenuItem<tauri::Wry>,
    pub(crate) reload_item: MenuItem<tauri::Wry>,
    pub(crate) auto_update_check_item: MenuItem<tauri::Wry>,
    pub(crate) quit_item: MenuItem<tauri::Wry>,
}

fn default_window_width() -> u32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_window_height() -> u32 {
    DEFAULT_WINDOW_HEIGHT
}

/// Last known main-window bounds, persisted across runs. Position is absent
/// on first run, which lets the window manager pick a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WindowState {
    #[serde(default)]
    pub(crate) x: Option<i32>,
    #[serde(default)]
    pub(crate) y: Option<i32>,
    #[serde(default = "default_window_width")]
    pub(crate) width: u32,
    #[serde(default = "default_window_height")]
    pub(crate) height: u32,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl WindowState {
    /// Size to restore with, clamped so a stale state file can never
    /// produce a window below the supported minimum.
    pub(crate) fn restore_size(&self) -> (f64, f64) {
        (
            f64::from(self.width).max(MIN_WINDOW_WIDTH),
            f64::from(self.height).max(MIN_WINDOW_HEIGHT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_state_starts_not_quitting() {
        let state = ShellState::default();
        assert!(!state.is_quitting());
    }

    #[test]
    fn mark_quitting_flips_once() {
        let state = ShellState::default();
        assert!(state.mark_quitting());
        assert!(state.is_quitting());
        assert!(!state.mark_quitting());
        assert!(state.is_quitting());
    }

    #[test]
    fn auto_update_check_toggle_alternates() {
        let state = AutoUpdateCheckState::new(true);
        assert!(state.is_enabled());
        assert!(!state.toggle());
        assert!(!state.is_enabled());
        assert!(state.toggle());
        assert!(state.is_enabled());
    }

    #[test]
    fn window_state_default_meets_minimum_size() {
        let state = WindowState::default();
        let (width, height) = state.restore_size();
        assert!(width >= MIN_WINDOW_WIDTH);
        assert!(height >= MIN_WINDOW_HEIGHT);
        assert_eq!(state.x, None);
        assert_eq!(state.y, None);
    }

    #[test]
    fn restore_size_clamps_undersized_state() {
        let state = WindowState {
            x: Some(0),
            y: Some(0),
            width: 320,
            height: 200,
        };
        assert_eq!(state.restore_size(), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn window_state_deserializes_with_missing_fields() {
        let state: WindowState = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(state, WindowState::default());

        let state: WindowState =
            serde_json::from_str(r#"{"x":10,"y":20,"width":1000,"height":700}"#)
                .expect("full object parses");
        assert_eq!(state.x, Some(10));
        assert_eq!(state.y, Some(20));
        assert_eq!(state.width, 1000);
        assert_eq!(state.height, 700);
    }
}
