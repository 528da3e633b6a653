//! Variable-name rules.

/// Returns `true` if `text` is a valid variable name.
///
/// A variable name is an ASCII letter followed by ASCII letters, digits, or
/// underscores.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
