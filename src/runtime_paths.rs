use std::{env, path::PathBuf};

use crate::SHELL_ROOT_ENV;

/// Directory holding the shell's persisted state and logs. An explicit
/// `INBOXER_ROOT` wins over the default `~/.inboxer`.
pub(crate) fn shell_root_dir() -> Option<PathBuf> {
    if let Ok(root) = env::var(SHELL_ROOT_ENV) {
        let trimmed = root.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    home::home_dir().map(|home| home.join(".inboxer"))
}

pub(crate) fn downloads_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join("Downloads"))
}
