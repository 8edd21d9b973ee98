//! Quoting text for use inside candidate patterns.

use phf::{Set, phf_set};

/// Characters with a meaning outside a bracket class.
const METACHARS: Set<char> = phf_set! {
    '\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$',
};

/// Characters with a meaning inside a bracket class.
const CLASS_METACHARS: Set<char> = phf_set! {
    '\\', ']', '[', '^', '-',
};

/// Escape `text` so that it matches itself literally.
///
/// ```
/// assert_eq!(greex::pattern::escape("a.b"), r"a\.b");
/// assert_eq!(greex::pattern::escape("a-b"), "a-b");
/// ```
pub fn escape(text: &str) -> String {
    escape_with(text, &METACHARS)
}

/// Escape `text` for use as the members of a `[...]` class.
pub fn escape_class(text: &str) -> String {
    escape_with(text, &CLASS_METACHARS)
}

fn escape_with(text: &str, specials: &Set<char>) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if specials.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
