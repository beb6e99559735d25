use super::parse_user_agent;
use serde::{Deserialize, Deserializer, Serialize, ser::SerializeStruct};
use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};

/// User Agent (UA) information.
///
/// Produced by interpreting a `User-Agent` (header) value,
/// see [the module level documentation](crate) for more information.
#[derive(Debug, Clone)]
pub struct UserAgent {
    pub(super) header: Arc<str>,
    pub(super) platform: Platform,
    pub(super) os: String,
    pub(super) os_version: Option<String>,
    pub(super) browser: BrowserKind,
    pub(super) browser_version: Option<String>,
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)
    }
}

impl UserAgent {
    /// Create a new [`UserAgent`] from a `User-Agent` (header) value.
    ///
    /// Interpretation never fails: unmatched strings report
    /// [`Platform::Other`] and [`BrowserKind::Unknown`].
    pub fn new(header: impl Into<Arc<str>>) -> Self {
        parse_user_agent(header.into())
    }

    /// returns the `User-Agent` (header) value used by the [`UserAgent`].
    #[must_use]
    pub fn header_str(&self) -> &str {
        &self.header
    }

    /// returns the [`Platform`] bucket the [`UserAgent`] was classified into.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// returns the operating system label of the [`UserAgent`],
    /// e.g. `Windows 10` or `macOS`.
    ///
    /// `Unknown` in case no operating system could be identified.
    #[must_use]
    pub fn os(&self) -> &str {
        &self.os
    }

    /// returns the operating system version of the [`UserAgent`], if found,
    /// normalised to dotted form (e.g. `10.15.7` for `Mac OS X 10_15_7`).
    #[must_use]
    pub fn os_version(&self) -> Option<&str> {
        self.os_version.as_deref()
    }

    /// returns the [`BrowserKind`] advertised by the [`UserAgent`].
    #[must_use]
    pub fn browser(&self) -> BrowserKind {
        self.browser
    }

    /// returns the browser version of the [`UserAgent`], if found,
    /// verbatim as it appears in the header (trailing markers such as
    /// the `+` in `533.2+` are kept).
    #[must_use]
    pub fn browser_version(&self) -> Option<&str> {
        self.browser_version.as_deref()
    }
}

impl FromStr for UserAgent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Serialize for UserAgent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let mut record = serializer.serialize_struct("UserAgent", 5)?;
        record.serialize_field("os", &self.os)?;
        record.serialize_field("os_version", &self.os_version)?;
        record.serialize_field("browser", &self.browser)?;
        record.serialize_field("browser_version", &self.browser_version)?;
        record.serialize_field("platform", &self.platform)?;
        record.end()
    }
}

/// Error returned when a label could not be parsed
/// into one of the UA enums of this crate.
#[derive(Debug, Clone)]
pub struct InvalidLabelError {
    subject: &'static str,
    value: String,
}

impl InvalidLabelError {
    fn new(subject: &'static str, value: &str) -> Self {
        Self {
            subject,
            value: value.to_owned(),
        }
    }
}

impl fmt::Display for InvalidLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.subject, self.value)
    }
}

impl std::error::Error for InvalidLabelError {}

/// Platform bucket within which the [`UserAgent`] operates.
///
/// Coarse device/OS family classification as used for analytics bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Windows Platform
    Windows,
    /// MacOS Platform
    MacOS,
    /// Linux Platform
    Linux,
    /// Android Platform
    Android,
    /// iOS Platform
    IOS,
    /// Kindle devices (Kindle strings also advertise Linux and Android)
    Kindle,
    /// Anything not matched by the buckets above
    Other,
}

impl Platform {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOS => "macos",
            Self::Linux => "linux",
            Self::Android => "android",
            Self::IOS => "ios",
            Self::Kindle => "kindle",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = InvalidLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("windows") {
            Ok(Self::Windows)
        } else if s.eq_ignore_ascii_case("macos") {
            Ok(Self::MacOS)
        } else if s.eq_ignore_ascii_case("linux") {
            Ok(Self::Linux)
        } else if s.eq_ignore_ascii_case("android") {
            Ok(Self::Android)
        } else if s.eq_ignore_ascii_case("ios") {
            Ok(Self::IOS)
        } else if s.eq_ignore_ascii_case("kindle") {
            Ok(Self::Kindle)
        } else if s.eq_ignore_ascii_case("other") {
            Ok(Self::Other)
        } else {
            Err(InvalidLabelError::new("platform", s))
        }
    }
}

impl Serialize for Platform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// The browser advertised by the [`UserAgent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserKind {
    /// Microsoft Edge (both the `Edg/` and legacy `Edge/` markers)
    Edge,
    /// Chrome and Chrome-compatible browsers advertising `Chrome/`
    Chrome,
    /// Firefox Browser
    Firefox,
    /// Safari Browser (desktop and mobile)
    Safari,
    /// Anything else
    Unknown,
}

impl BrowserKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Edge => "Edge",
            Self::Chrome => "Chrome",
            Self::Firefox => "Firefox",
            Self::Safari => "Safari",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BrowserKind {
    type Err = InvalidLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("edge") {
            Ok(Self::Edge)
        } else if s.eq_ignore_ascii_case("chrome") {
            Ok(Self::Chrome)
        } else if s.eq_ignore_ascii_case("firefox") {
            Ok(Self::Firefox)
        } else if s.eq_ignore_ascii_case("safari") {
            Ok(Self::Safari)
        } else if s.eq_ignore_ascii_case("unknown") {
            Ok(Self::Unknown)
        } else {
            Err(InvalidLabelError::new("browser kind", s))
        }
    }
}

impl Serialize for BrowserKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BrowserKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}
