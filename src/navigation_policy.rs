use std::sync::OnceLock;

use crate::url_glob::UrlPattern;

/// URL shapes that are allowed to load inside the shell window: the hosted
/// app itself plus the Google account login/logout/session flows it needs
/// to complete in place. Everything else opens in the system browser.
const ALLOWED_NAVIGATION_PATTERNS: [&str; 5] = [
    "https://accounts.google.com/@(u|AccountChooser|AddSession|ServiceLogin|CheckCookie|Logout){**/**,**}",
    "https://accounts.google.com/signin/@(usernamerecovery|recovery|challenge){**/**,**}",
    "http://www.google.*/accounts/Logout2**",
    "https://inbox.google.com{**/**,**}",
    "https://{accounts.youtube,inbox.google}.com/accounts/@(SetOSID|SetSID)**",
];

fn compiled_patterns() -> &'static [UrlPattern] {
    static COMPILED: OnceLock<Vec<UrlPattern>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        // A pattern that fails to compile silently matches nothing.
        ALLOWED_NAVIGATION_PATTERNS
            .iter()
            .filter_map(|pattern| UrlPattern::parse(pattern))
            .collect()
    })
}

/// True when any allowlist pattern matches the raw URL string.
pub(crate) fn is_allowed(url: &str) -> bool {
    compiled_patterns().iter().any(|pattern| pattern.matches(url))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationTarget {
    /// Load inside the shell window.
    Shell,
    /// Hand to the user's default browser.
    ExternalBrowser,
}

pub(crate) fn decide_navigation_target(url: &str) -> NavigationTarget {
    if is_allowed(url) {
        NavigationTarget::Shell
    } else {
        NavigationTarget::ExternalBrowser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_documented_login_shapes_are_allowed() {
        for url in [
            "https://accounts.google.com/ServiceLogin?x=1",
            "https://accounts.google.com/ServiceLogin",
            "https://accounts.google.com/AccountChooser?Email=a@b.c",
            "https://accounts.google.com/signin/challenge/abc",
            "https://accounts.google.com/signin/usernamerecovery",
            "http://www.google.com/accounts/Logout2?foo",
            "http://www.google.de/accounts/Logout2",
            "https://inbox.google.com/",
            "https://inbox.google.com/u/0/",
            "https://accounts.youtube.com/accounts/SetSID",
            "https://inbox.google.com/accounts/SetOSID?continue=x",
        ] {
            assert!(is_allowed(url), "expected allowlisted: {url}");
        }
    }

    #[test]
    fn unrelated_urls_are_not_allowed() {
        for url in [
            "https://example.com/",
            "https://google.com/search?q=x",
            "https://www.google.com/accounts/Logout2",
            "https://mail.google.com/",
            "https://accounts.google.com/NotAThing",
            "",
            "not a url at all",
        ] {
            assert!(!is_allowed(url), "expected blocked: {url}");
        }
    }

    #[test]
    fn is_allowed_is_idempotent() {
        let url = "https://accounts.google.com/ServiceLogin?x=1";
        assert_eq!(is_allowed(url), is_allowed(url));
        let url = "https://example.com/";
        assert_eq!(is_allowed(url), is_allowed(url));
    }

    #[test]
    fn decision_maps_allowlist_result() {
        assert_eq!(
            decide_navigation_target("https://inbox.google.com/u/0/"),
            NavigationTarget::Shell
        );
        assert_eq!(
            decide_navigation_target("https://example.com/"),
            NavigationTarget::ExternalBrowser
        );
    }
}
