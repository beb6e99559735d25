//! User Agent (UA) interpretation.
//!
//! See [`UserAgent::new`] for the main entry point.

mod info;
pub use info::{BrowserKind, InvalidLabelError, Platform, UserAgent};

mod parse;
use parse::parse_user_agent;

/// Interpret an arbitrary User Agent string.
///
/// Alias for [`UserAgent::new`]. Total: every input string,
/// including the empty string, yields a well-formed [`UserAgent`].
pub fn interpret(ua: impl Into<std::sync::Arc<str>>) -> UserAgent {
    UserAgent::new(ua)
}
