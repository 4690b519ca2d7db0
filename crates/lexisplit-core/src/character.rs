// Word-character classification
//
// Only the ASCII letters a-z (after lowercasing) count as word characters.
// Accented and other non-ASCII letters act as separators.

/// Fold a character to its lowercase word-character form.
///
/// Returns `Some(letter)` when the full lowercase mapping of `c` is exactly
/// one character in `a..=z`, and `None` otherwise. Characters whose
/// lowercase form expands to several characters (e.g. U+0130) are never
/// word characters, while U+212A KELVIN SIGN folds to `k`.
pub fn fold_word_char(c: char) -> Option<char> {
    if c.is_ascii() {
        let lower = c.to_ascii_lowercase();
        return lower.is_ascii_lowercase().then_some(lower);
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l.is_ascii_lowercase() => Some(l),
        _ => None,
    }
}

/// Check whether a character belongs to a word token.
pub fn is_word_char(c: char) -> bool {
    fold_word_char(c).is_some()
}
