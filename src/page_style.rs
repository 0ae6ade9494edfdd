use tauri::Webview;

use crate::append_desktop_log;

const SHELL_STYLESHEET: &str = include_str!("../assets/shell.css");
const STYLE_ELEMENT_ID: &str = "inboxer-shell-style";

/// Injects the shell stylesheet into the loaded page. Runs on every page
/// load so login redirects pick the overrides up too; the element id keeps
/// repeat injections into the same document from stacking.
pub(crate) fn inject_shell_stylesheet(webview: &Webview) {
    let css = match serde_json::to_string(SHELL_STYLESHEET) {
        Ok(css) => css,
        Err(error) => {
            append_desktop_log(&format!("failed to quote shell stylesheet: {error}"));
            return;
        }
    };

    let script = format!(
        "(function() {{\
            if (document.getElementById('{STYLE_ELEMENT_ID}')) return;\
            var style = document.createElement('style');\
            style.id = '{STYLE_ELEMENT_ID}';\
            style.textContent = {css};\
            document.head.appendChild(style);\
        }})();"
    );

    if let Err(error) = webview.eval(&script) {
        append_desktop_log(&format!("failed to inject shell stylesheet: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_stylesheet_is_embedded_and_non_empty() {
        assert!(SHELL_STYLESHEET.contains("-webkit-app-region"));
    }

    #[test]
    fn stylesheet_quotes_into_a_single_js_string() {
        let quoted = serde_json::to_string(SHELL_STYLESHEET).expect("stylesheet quotes");
        assert!(quoted.starts_with('"') && quoted.ends_with('"'));
        assert!(!quoted.contains('\n'));
    }
}
