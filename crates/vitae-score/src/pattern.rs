//! Centralized keyword-to-pattern construction.
//!
//! Every scorer that matches a user-controlled keyword against text goes
//! through `TermMatcher`, so escaping happens in exactly one place and any
//! keyword string is matched literally regardless of regex metacharacters.

use regex::Regex;

/// Case-insensitive word-boundary matcher for one keyword.
pub struct TermMatcher {
    regex: Regex,
}

impl TermMatcher {
    pub fn new(term: &str) -> Self {
        // regex::escape output is always a valid literal, so compilation
        // cannot fail for any input keyword.
        let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
        let regex = Regex::new(&pattern).expect("escaped term pattern");
        Self { regex }
    }

    /// Number of occurrences in the text.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Byte offsets of every occurrence.
    pub fn find_offsets(&self, text: &str) -> Vec<usize> {
        self.regex.find_iter(text).map(|m| m.start()).collect()
    }

    /// Byte offset of the first occurrence.
    pub fn first_offset(&self, text: &str) -> Option<usize> {
        self.regex.find(text).map(|m| m.start())
    }
}

/// Escape a keyword for interpolation into a larger pattern.
pub fn escape(term: &str) -> String {
    regex::escape(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_word_boundary_matches() {
        let matcher = TermMatcher::new("python");
        assert_eq!(matcher.count("Python and python3 and PYTHON"), 2);
    }

    #[test]
    fn no_substring_matches() {
        let matcher = TermMatcher::new("java");
        assert_eq!(matcher.count("javascript is not java"), 1);
    }

    #[test]
    fn special_characters_are_literal() {
        // These would be malformed or mean something else unescaped
        for term in ["c++", "a/b testing", "ci/cd", ".net", "node.js", "c#"] {
            let matcher = TermMatcher::new(term);
            let text = format!("worked with {term} daily");
            assert!(matcher.is_match(&text), "failed for {term}");
        }
    }

    #[test]
    fn dot_is_not_a_wildcard() {
        let matcher = TermMatcher::new("node.js");
        assert!(!matcher.is_match("nodexjs"));
    }

    #[test]
    fn find_offsets_in_order() {
        let matcher = TermMatcher::new("api");
        let offsets = matcher.find_offsets("api first, then API again");
        assert_eq!(offsets.len(), 2);
        assert!(offsets[0] < offsets[1]);
    }
}
