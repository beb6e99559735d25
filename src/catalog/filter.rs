use serde::{Deserialize, Serialize};

/// Constraints narrowing down which catalog entries
/// [`random`](super::UserAgentCatalog::random) may pick from.
///
/// Every given constraint is a case sensitive substring the User Agent
/// string itself has to contain; multiple constraints combine with
/// AND semantics. The default filter matches every entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserAgentFilter {
    /// Substring the browser part of the User Agent string has to
    /// contain, e.g. `Chrome` or `Firefox`.
    pub browser: Option<String>,
    /// Substring the system part of the User Agent string has to
    /// contain, e.g. `Windows` or `Macintosh`.
    pub system: Option<String>,
}

impl UserAgentFilter {
    /// Require the User Agent string to contain the given browser substring.
    #[must_use]
    pub fn with_browser(mut self, browser: impl Into<String>) -> Self {
        self.browser = Some(browser.into());
        self
    }

    /// Require the User Agent string to contain the given browser substring.
    pub fn set_browser(&mut self, browser: impl Into<String>) -> &mut Self {
        self.browser = Some(browser.into());
        self
    }

    /// Require the User Agent string to contain the given system substring.
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Require the User Agent string to contain the given system substring.
    pub fn set_system(&mut self, system: impl Into<String>) -> &mut Self {
        self.system = Some(system.into());
        self
    }

    pub(super) fn matches(&self, ua: &str) -> bool {
        self.browser.as_deref().is_none_or(|browser| ua.contains(browser))
            && self.system.as_deref().is_none_or(|system| ua.contains(system))
    }
}
