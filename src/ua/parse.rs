use std::sync::Arc;

use crate::str::{
    any_submatch_ignore_ascii_case, contains_ignore_ascii_case, submatch_ignore_ascii_case,
};

use super::{BrowserKind, Platform, UserAgent};

/// Maximum length of a User Agent string that we take into consideration.
/// This is significantly longer than expected in the wild where at most we observed around 300 characters.
const MAX_UA_LENGTH: usize = 512;

/// Windows NT version token to marketing name, most recent first.
///
/// Extend this table when a new NT version ships; tokens not
/// listed here fall back to `Windows {token}`.
const WINDOWS_NT_VERSIONS: &[(&str, &str)] = &[
    ("10.0", "Windows 10"),
    ("6.3", "Windows 8.1"),
    ("6.2", "Windows 8"),
    ("6.1", "Windows 7"),
    ("6.0", "Windows Vista"),
    ("5.2", "Windows XP x64"),
    ("5.1", "Windows XP"),
];

/// interpret the http user agent string and return a [`UserAgent`] info,
/// containing the interpreted information or fallback to defaults in case nothing matched.
///
/// # Remarks
///
/// NOTE that this function does not aim to be:
///
/// - super accurate: it aims to be fast and good for the popular cases;
/// - complete: we do not care about all the possible user agents out there, only the popular ones.
///
/// That said. Do open a ticket if you find bugs or think something is missing.
pub(crate) fn parse_user_agent(header: impl Into<Arc<str>>) -> UserAgent {
    let header = header.into();
    let ua = header.as_ref();
    let ua = if ua.len() > MAX_UA_LENGTH {
        ua.get(..MAX_UA_LENGTH).unwrap_or(ua)
    } else {
        ua
    };

    let platform = parse_platform(ua);
    let (os, os_version) = parse_os(ua, platform);
    let (browser, browser_version) = parse_browser(ua);

    UserAgent {
        header,
        platform,
        os,
        os_version,
        browser,
        browser_version,
    }
}

/// Ordered platform classification, first match wins.
///
/// Device tokens have to be checked before the OS family tokens:
/// iOS strings contain `like Mac OS X`, and both Kindle
/// and Android strings contain `Linux`.
fn parse_platform(ua: &str) -> Platform {
    if any_submatch_ignore_ascii_case(ua, ["iPhone", "iPad", "iPod"]) {
        Platform::IOS
    } else if submatch_ignore_ascii_case(ua, "Kindle") {
        Platform::Kindle
    } else if submatch_ignore_ascii_case(ua, "Android") {
        Platform::Android
    } else if any_submatch_ignore_ascii_case(ua, ["Macintosh", "Mac OS X"]) {
        Platform::MacOS
    } else if submatch_ignore_ascii_case(ua, "Windows") {
        Platform::Windows
    } else if submatch_ignore_ascii_case(ua, "Linux") {
        Platform::Linux
    } else {
        Platform::Other
    }
}

fn parse_os(ua: &str, platform: Platform) -> (String, Option<String>) {
    match platform {
        Platform::Windows => {
            let version = token_after(ua, "Windows NT ").map(|t| trim_os_token(t).to_owned());
            let os = match version.as_deref() {
                Some(version) => WINDOWS_NT_VERSIONS
                    .iter()
                    .find_map(|(token, name)| (*token == version).then(|| (*name).to_owned()))
                    .unwrap_or_else(|| format!("Windows {version}")),
                None => "Windows".to_owned(),
            };
            (os, version)
        }
        Platform::MacOS => (
            "macOS".to_owned(),
            token_after(ua, "Mac OS X ").map(|t| trim_os_token(t).replace('_', ".")),
        ),
        Platform::Linux => ("Linux".to_owned(), None),
        Platform::Android => (
            "Android".to_owned(),
            token_after(ua, "Android ").map(|t| trim_os_token(t).to_owned()),
        ),
        Platform::IOS => (
            "iOS".to_owned(),
            token_after(ua, "CPU iPhone OS ")
                .or_else(|| token_after(ua, "CPU OS "))
                .map(|t| trim_os_token(t).replace('_', ".")),
        ),
        Platform::Kindle => (
            "Kindle".to_owned(),
            token_after(ua, "Kindle/").map(|t| trim_os_token(t).to_owned()),
        ),
        Platform::Other => ("Unknown".to_owned(), None),
    }
}

/// Ordered browser classification, first match wins.
///
/// Order matters here as well: every Edge string also advertises
/// `Chrome/`, and every Chromium family string also advertises `Safari/`.
fn parse_browser(ua: &str) -> (BrowserKind, Option<String>) {
    if submatch_ignore_ascii_case(ua, "Edg/") {
        (BrowserKind::Edge, owned_token_after(ua, "Edg/"))
    } else if submatch_ignore_ascii_case(ua, "Edge/") {
        (BrowserKind::Edge, owned_token_after(ua, "Edge/"))
    } else if submatch_ignore_ascii_case(ua, "Chrome/") {
        (BrowserKind::Chrome, owned_token_after(ua, "Chrome/"))
    } else if submatch_ignore_ascii_case(ua, "Firefox/") {
        (BrowserKind::Firefox, owned_token_after(ua, "Firefox/"))
    } else if submatch_ignore_ascii_case(ua, "Safari/") {
        // Safari advertises its human version after `Version/` and a build
        // number after `Safari/`; the build number is the reported version,
        // with or without a `Version/` marker being present.
        (BrowserKind::Safari, owned_token_after(ua, "Safari/"))
    } else {
        (BrowserKind::Unknown, None)
    }
}

/// The token directly following `marker`, up to the next whitespace.
///
/// The token is returned verbatim: trailing markers such as the `+`
/// in `Safari/533.2+` are part of the token. Returns `None` for
/// a missing marker as well as for a marker at the very end of `s`.
fn token_after<'a>(s: &'a str, marker: &str) -> Option<&'a str> {
    let start = contains_ignore_ascii_case(s, marker)? + marker.len();
    let rest = s.get(start..)?;
    let token = match rest.find(char::is_whitespace) {
        Some(end) => &rest[..end],
        None => rest,
    };
    (!token.is_empty()).then_some(token)
}

fn owned_token_after(s: &str, marker: &str) -> Option<String> {
    token_after(s, marker).map(str::to_owned)
}

/// Strip the structural delimiters an OS version token drags along
/// when it sits at the end of a comment group, e.g. `10_15_7)` or `10;`.
fn trim_os_token(token: &str) -> &str {
    token.trim_end_matches([';', ')', ','])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_after() {
        for (s, marker, expected) in [
            ("Chrome/91.0.4472.124 Safari/537.36", "Chrome/", Some("91.0.4472.124")),
            ("Chrome/91.0.4472.124 Safari/537.36", "Safari/", Some("537.36")),
            ("Version/5.0 Safari/533.2+ Kindle/3.0+", "Safari/", Some("533.2+")),
            ("Version/5.0 Safari/533.2+ Kindle/3.0+", "Kindle/", Some("3.0+")),
            ("Firefox/89.0", "firefox/", Some("89.0")),
            ("Firefox/89.0", "Chrome/", None),
            ("Chrome/", "Chrome/", None),
            ("", "Chrome/", None),
        ] {
            assert_eq!(
                token_after(s, marker),
                expected,
                "token after {marker:?} in {s:?}",
            );
        }
    }

    #[test]
    fn test_trim_os_token() {
        assert_eq!(trim_os_token("10.0;"), "10.0");
        assert_eq!(trim_os_token("10_15_7)"), "10_15_7");
        assert_eq!(trim_os_token("10"), "10");
        assert_eq!(trim_os_token("3.0+"), "3.0+");
        assert_eq!(trim_os_token(""), "");
    }

    #[test]
    fn test_parse_os_windows_marketing_names() {
        for (ua, expected_os, expected_version) in [
            ("Windows NT 10.0; Win64; x64", "Windows 10", Some("10.0")),
            ("Windows NT 6.3; WOW64", "Windows 8.1", Some("6.3")),
            ("Windows NT 6.1; Win64; x64", "Windows 7", Some("6.1")),
            ("Windows NT 5.1", "Windows XP", Some("5.1")),
            // not in the lookup table: keep the raw token visible
            ("Windows NT 4.0", "Windows 4.0", Some("4.0")),
            ("Windows 98", "Windows", None),
        ] {
            let (os, version) = parse_os(ua, Platform::Windows);
            assert_eq!(os, expected_os, "ua: {ua:?}");
            assert_eq!(version.as_deref(), expected_version, "ua: {ua:?}");
        }
    }

    #[test]
    fn test_parse_os_version_normalisation() {
        let (os, version) = parse_os(
            "Macintosh; Intel Mac OS X 10_15_7) AppleWebKit",
            Platform::MacOS,
        );
        assert_eq!(os, "macOS");
        assert_eq!(version.as_deref(), Some("10.15.7"));

        let (os, version) = parse_os(
            "iPad; CPU OS 14_6 like Mac OS X) AppleWebKit",
            Platform::IOS,
        );
        assert_eq!(os, "iOS");
        assert_eq!(version.as_deref(), Some("14.6"));

        let (os, version) = parse_os("Linux; Android 10; SM-A505F)", Platform::Android);
        assert_eq!(os, "Android");
        assert_eq!(version.as_deref(), Some("10"));
    }
}
