use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{runtime_paths, DESKTOP_LOG_FILE};

pub(crate) fn resolve_desktop_log_path(root_dir: Option<&Path>, file_name: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Appends one timestamped line to the desktop log. Logging is best-effort;
/// any I/O failure is swallowed so callers never have to handle it.
fn append_log_line(prefix: &str, message: &str) {
    let root_dir = runtime_paths::shell_root_dir();
    let path = resolve_desktop_log_path(root_dir.as_deref(), DESKTOP_LOG_FILE);
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let line = format!("[{timestamp}] {prefix}{message}\n");
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&path) {
        let _ = file.write_all(line.as_bytes());
    }
}

pub(crate) fn append_desktop_log(message: &str) {
    append_log_line("", message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_log_line("[startup] ", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_log_line("[shutdown] ", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_lives_under_the_root_logs_dir() {
        let path = resolve_desktop_log_path(Some(Path::new("/tmp/shell-root")), "desktop.log");
        assert_eq!(path, Path::new("/tmp/shell-root/logs/desktop.log"));
    }

    #[test]
    fn log_path_without_a_root_falls_back_to_the_bare_file_name() {
        let path = resolve_desktop_log_path(None, "desktop.log");
        assert_eq!(path, Path::new("desktop.log"));
    }
}
