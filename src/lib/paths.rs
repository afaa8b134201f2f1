//! String-level path helpers that understand both `/` and `\` separators.
//!
//! Driver paths are assembled as plain strings so that a Windows-style
//! executable path keeps its backslashes even when inspected on another host.

use std::path::MAIN_SEPARATOR;

/// Separators recognised in an executable path, regardless of host.
pub const SEPARATORS: [char; 2] = ['/', '\\'];

/// Byte index just past the last separator in `path`, or 0 if there is none.
pub fn file_name_start(path: &str) -> usize {
    path.rfind(SEPARATORS).map(|idx| idx + 1).unwrap_or(0)
}

/// The separator character used last in `path`, falling back to the host's.
pub fn detect_separator(path: &str) -> char {
    path.rfind(SEPARATORS)
        .and_then(|idx| path[idx..].chars().next())
        .unwrap_or(MAIN_SEPARATOR)
}

/// Join `relative` onto `base` using `separator`, normalising any separators
/// inside `relative` to the same character.
pub fn join_with(base: &str, relative: &str, separator: char) -> String {
    let relative: String = relative
        .trim_start_matches(SEPARATORS)
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { separator } else { c })
        .collect();
    if base.is_empty() {
        return relative;
    }
    if base.ends_with(SEPARATORS) {
        format!("{base}{relative}")
    } else {
        format!("{base}{separator}{relative}")
    }
}

/// Returns true if `path` starts at a root or drive (`/x`, `\x`, `C:\x`, `C:/x`).
pub fn is_rooted(path: &str) -> bool {
    if path.starts_with(SEPARATORS) {
        return true;
    }
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(drive), Some(':'), Some(sep)) if drive.is_ascii_alphabetic() && SEPARATORS.contains(&sep)
    )
}
