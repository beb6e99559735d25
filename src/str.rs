//! ASCII case insensitive substring search.
//!
//! User Agents in the wild disagree on marker casing (`Mobile` vs `mobile`),
//! so every classification check goes through these helpers.

/// Finds the first occurrence of `sub` within `s`,
/// using ASCII case insensitive comparison.
///
/// The returned index is a byte offset into `s`.
/// If `sub` is empty, this returns `Some(0)`.
pub(crate) fn contains_ignore_ascii_case(s: &str, sub: &str) -> Option<usize> {
    let n = sub.len();

    if n == 0 {
        return Some(0);
    }

    s.as_bytes()
        .windows(n)
        .position(|window| window.eq_ignore_ascii_case(sub.as_bytes()))
}

/// Returns `true` if `sub` occurs within `s`,
/// using ASCII case insensitive comparison.
///
/// This is a convenience wrapper around [`contains_ignore_ascii_case`].
pub(crate) fn submatch_ignore_ascii_case(s: &str, sub: &str) -> bool {
    contains_ignore_ascii_case(s, sub).is_some()
}

/// Returns `true` if any item of `sub_iter` occurs within `s`,
/// using ASCII case insensitive comparison.
///
/// Iteration order does not matter for the result,
/// only for the amount of work performed.
pub(crate) fn any_submatch_ignore_ascii_case<'a>(
    s: &str,
    sub_iter: impl IntoIterator<Item = &'a str>,
) -> bool {
    sub_iter
        .into_iter()
        .any(|sub| submatch_ignore_ascii_case(s, sub))
}
