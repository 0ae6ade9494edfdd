use std::process::{Command, Stdio};
use url::Url;

use crate::append_desktop_log;

pub(crate) fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("Missing external URL.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported URL scheme '{scheme}', only http/https are allowed."
        )),
    }
}

#[cfg(target_os = "macos")]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'open': {error}"))
}

#[cfg(target_os = "windows")]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("rundll32")
        .args(["url.dll,FileProtocolHandler", url])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'rundll32': {error}"))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("xdg-open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'xdg-open': {error}"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
fn open_url_with_system_browser(_url: &str) -> Result<(), String> {
    Err("Opening external URLs is not supported on this platform.".to_string())
}

/// Hands a URL to the default browser without waiting on the result. The
/// shell does not track the handoff; failures are only logged.
pub(crate) fn open_external(raw_url: &str) {
    let parsed = match parse_openable_url(raw_url) {
        Ok(parsed) => parsed,
        Err(error) => {
            append_desktop_log(&format!("refusing to open external URL: {error}"));
            return;
        }
    };

    if let Err(error) = open_url_with_system_browser(parsed.as_ref()) {
        append_desktop_log(&format!("failed to open external URL: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_openable_url_accepts_http_and_https() {
        assert!(parse_openable_url("https://example.com/a?b=c").is_ok());
        assert!(parse_openable_url("http://example.com").is_ok());
        assert!(parse_openable_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn parse_openable_url_rejects_other_schemes() {
        assert!(parse_openable_url("file:///etc/passwd").is_err());
        assert!(parse_openable_url("javascript:alert(1)").is_err());
        assert!(parse_openable_url("mailto:a@b.c").is_err());
    }

    #[test]
    fn parse_openable_url_rejects_empty_and_invalid_input() {
        assert!(parse_openable_url("").is_err());
        assert!(parse_openable_url("   ").is_err());
        assert!(parse_openable_url("not a url").is_err());
    }
}
