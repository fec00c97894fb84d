//! Shared tokenization helpers.
//!
//! Two word notions coexist: `word_tokens` (alphanumeric runs, used for
//! candidate term extraction) and `whitespace_word_count` (used for
//! document length and density denominators). They are intentionally
//! different; density measures against everything typed, extraction only
//! cares about matchable words.

/// Lowercased alphanumeric word runs.
pub fn word_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            current.push(ch.to_ascii_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Number of whitespace-separated words.
pub fn whitespace_word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Byte index of the first-30% cutoff, snapped back to a char boundary.
pub fn leading_cutoff(text: &str, fraction: f64) -> usize {
    let mut idx = (text.len() as f64 * fraction) as usize;
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
