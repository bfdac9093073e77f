//! Name transforms shared by every generated unit.
//!
//! Go decides visibility by the case of the first character, so the same
//! owner name appears exported (`OrderHandler`) on the interface and
//! unexported (`orderHandler`) on the implementing struct.

/// Returns `text` with its first character upper-cased.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns `text` with its first character lower-cased.
pub fn decapitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First character of `word`, used as the method receiver name.
pub fn first_char(word: &str) -> String {
    word.chars().next().map(String::from).unwrap_or_default()
}

/// Last non-empty segment of a slash separated relative path.
///
/// `ifadapter/controller/` yields `controller`.
pub fn dir_label(rel_path: &str) -> &str {
    rel_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .unwrap_or("")
}

/// Strips a trailing file extension, so `Order.go` names the `Order` owner.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => name,
        Some(ix) => &name[..ix],
    }
}
