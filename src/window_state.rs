//! File-backed shell configuration: the last known window bounds, the
//! always-on-top flag, and the automatic-update-check flag, all stored in
//! one JSON object (`desktop_state.json` under the shell root).
//!
//! A missing or corrupt file is never an error; reads degrade to "no
//! value" and the next write resets the file to a valid object.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::{WindowState, DESKTOP_STATE_FILE};

const WINDOW_STATE_FIELD: &str = "windowState";
const ALWAYS_ON_TOP_FIELD: &str = "alwaysOnTop";
const AUTO_UPDATE_CHECK_FIELD: &str = "autoUpdateCheck";

fn empty_state_object() -> Value {
    Value::Object(Map::new())
}

fn desktop_state_path(root_dir: Option<&Path>) -> Option<PathBuf> {
    root_dir.map(|root| root.join(DESKTOP_STATE_FILE))
}

fn read_state_object(root_dir: Option<&Path>) -> Option<Value> {
    let state_path = desktop_state_path(root_dir)?;
    let raw = fs::read_to_string(state_path).ok()?;
    serde_json::from_str(&raw).ok()
}

pub(crate) fn read_window_state(root_dir: Option<&Path>) -> Option<WindowState> {
    let parsed = read_state_object(root_dir)?;
    let value = parsed.get(WINDOW_STATE_FIELD)?;
    serde_json::from_value(value.clone()).ok()
}

pub(crate) fn read_always_on_top(root_dir: Option<&Path>) -> Option<bool> {
    read_state_object(root_dir)?
        .get(ALWAYS_ON_TOP_FIELD)?
        .as_bool()
}

pub(crate) fn read_auto_update_check(root_dir: Option<&Path>) -> Option<bool> {
    read_state_object(root_dir)?
        .get(AUTO_UPDATE_CHECK_FIELD)?
        .as_bool()
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = empty_state_object();
    }
    value
        .as_object_mut()
        .expect("value was just normalized into a JSON object")
}

/// Read-modify-write of the state file, resetting unreadable content.
fn update_state_object(
    root_dir: Option<&Path>,
    apply: impl FnOnce(&mut Map<String, Value>),
) -> Result<(), String> {
    let Some(state_path) = desktop_state_path(root_dir) else {
        crate::append_desktop_log("shell state path is unavailable; skipping persistence");
        return Ok(());
    };

    if let Some(parent_dir) = state_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create shell state directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut parsed = match fs::read_to_string(&state_path) {
        Ok(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(error) => {
                crate::append_desktop_log(&format!(
                    "failed to parse shell state {}: {}. resetting state file",
                    state_path.display(),
                    error
                ));
                empty_state_object()
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => empty_state_object(),
        Err(error) => {
            return Err(format!(
                "Failed to read shell state {}: {}",
                state_path.display(),
                error
            ));
        }
    };

    apply(ensure_object(&mut parsed));

    let serialized = serde_json::to_string_pretty(&parsed)
        .map_err(|error| format!("Failed to serialize shell state: {error}"))?;
    fs::write(&state_path, serialized).map_err(|error| {
        format!(
            "Failed to write shell state {}: {}",
            state_path.display(),
            error
        )
    })
}

pub(crate) fn write_window_state(
    state: &WindowState,
    root_dir: Option<&Path>,
) -> Result<(), String> {
    let snapshot = serde_json::to_value(state)
        .map_err(|error| format!("Failed to serialize window state: {error}"))?;
    update_state_object(root_dir, |object| {
        object.insert(WINDOW_STATE_FIELD.to_string(), snapshot);
    })
}

pub(crate) fn write_auto_update_check(
    enabled: bool,
    root_dir: Option<&Path>,
) -> Result<(), String> {
    update_state_object(root_dir, |object| {
        object.insert(AUTO_UPDATE_CHECK_FIELD.to_string(), Value::Bool(enabled));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_state_round_trips_through_the_store() {
        let root = tempfile::tempdir().expect("create temp root");
        let state = WindowState {
            x: Some(10),
            y: Some(20),
            width: 1000,
            height: 700,
        };

        write_window_state(&state, Some(root.path())).expect("write state");
        assert_eq!(read_window_state(Some(root.path())), Some(state));
    }

    #[test]
    fn missing_state_file_reads_as_none() {
        let root = tempfile::tempdir().expect("create temp root");
        assert_eq!(read_window_state(Some(root.path())), None);
        assert_eq!(read_always_on_top(Some(root.path())), None);
        assert_eq!(read_auto_update_check(Some(root.path())), None);
    }

    #[test]
    fn corrupt_state_file_reads_as_none_and_is_reset_on_write() {
        let root = tempfile::tempdir().expect("create temp root");
        let state_path = root.path().join(DESKTOP_STATE_FILE);
        fs::write(&state_path, "not json at all").expect("write junk");

        assert_eq!(read_window_state(Some(root.path())), None);

        write_auto_update_check(false, Some(root.path())).expect("write resets file");
        assert_eq!(read_auto_update_check(Some(root.path())), Some(false));
    }

    #[test]
    fn writes_preserve_unrelated_fields() {
        let root = tempfile::tempdir().expect("create temp root");
        let state_path = root.path().join(DESKTOP_STATE_FILE);
        fs::write(&state_path, r#"{"alwaysOnTop": true}"#).expect("seed state");

        write_window_state(&WindowState::default(), Some(root.path())).expect("write state");

        assert_eq!(read_always_on_top(Some(root.path())), Some(true));
        assert_eq!(
            read_window_state(Some(root.path())),
            Some(WindowState::default())
        );
    }

    #[test]
    fn partial_window_state_object_fills_defaults() {
        let root = tempfile::tempdir().expect("create temp root");
        let state_path = root.path().join(DESKTOP_STATE_FILE);
        fs::write(&state_path, r#"{"windowState": {"width": 1000}}"#).expect("seed state");

        let state = read_window_state(Some(root.path())).expect("state parses");
        assert_eq!(state.width, 1000);
        assert_eq!(state.height, WindowState::default().height);
        assert_eq!(state.x, None);
    }

    #[test]
    fn missing_root_dir_is_a_silent_no_op() {
        write_window_state(&WindowState::default(), None).expect("no-op write succeeds");
        assert_eq!(read_window_state(None), None);
    }
}
