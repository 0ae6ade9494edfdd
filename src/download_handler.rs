use tauri::webview::DownloadEvent;
use url::Url;

use crate::{append_desktop_log, runtime_paths};

/// Routes page-initiated downloads into the user's Downloads directory.
/// Installed on the main webview at build time; has no interaction with
/// the shell's window or navigation state.
pub(crate) fn handle_download(_webview: tauri::Webview, event: DownloadEvent<'_>) -> bool {
    match event {
        DownloadEvent::Requested { url, destination } => {
            let file_name = file_name_from_url(&url);
            if let Some(downloads) = runtime_paths::downloads_dir() {
                *destination = downloads.join(&file_name);
            }
            append_desktop_log(&format!(
                "download started: {} -> {}",
                url,
                destination.display()
            ));
            true
        }
        DownloadEvent::Finished { url, success, .. } => {
            append_desktop_log(&format!(
                "download {}: {}",
                if success { "finished" } else { "failed" },
                url
            ));
            true
        }
        _ => true,
    }
}

fn file_name_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| {
            segments
                .filter(|segment| !segment.is_empty())
                .next_back()
                .map(str::to_string)
        })
        .unwrap_or_else(|| "download".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(url: &str) -> Url {
        Url::parse(url).expect("url parses")
    }

    #[test]
    fn file_name_comes_from_the_last_path_segment() {
        assert_eq!(
            file_name_from_url(&parsed("https://host/a/b/report.pdf")),
            "report.pdf"
        );
        assert_eq!(
            file_name_from_url(&parsed("https://host/file.zip?token=abc")),
            "file.zip"
        );
    }

    #[test]
    fn trailing_slash_falls_back_to_the_previous_segment() {
        assert_eq!(file_name_from_url(&parsed("https://host/a/b/")), "b");
    }

    #[test]
    fn bare_host_falls_back_to_a_generic_name() {
        assert_eq!(file_name_from_url(&parsed("https://host/")), "download");
        assert_eq!(file_name_from_url(&parsed("https://host")), "download");
    }
}
