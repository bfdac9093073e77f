//! Splicer and idempotency guard.
//!
//! Both operate on raw unit text. [`splice`] never re-indents or dedupes;
//! [`already_has`] is a plain substring test on a signature token.

/// Returns `text[..offset] + fragment + text[offset..]`.
///
/// # Panics
/// Panics if `offset` is past the end of `text` or not on a char boundary.
/// Offsets come from the locator, which only returns ASCII boundaries.
pub fn splice(text: &str, offset: usize, fragment: &str) -> String {
    let mut out = String::with_capacity(text.len() + fragment.len());
    out.push_str(&text[..offset]);
    out.push_str(fragment);
    out.push_str(&text[offset..]);
    out
}

/// Whether `token` already occurs anywhere in `text`.
pub fn already_has(text: &str, token: &str) -> bool {
    text.contains(token)
}

/// Guard token for a method: its name followed by the parameter-list opener.
pub fn method_token(method_name: &str) -> String {
    format!("{method_name}(")
}
