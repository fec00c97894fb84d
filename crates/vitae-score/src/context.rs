use crate::pattern::TermMatcher;
use vitae_core::ContextAnalysis;
use vitae_lexicon::{ACTION_VERBS, METRIC_PATTERNS};

/// Context window inspected around each keyword occurrence, in bytes.
const WINDOW: usize = 50;

const BASE_SCORE: f64 = 50.0;
const ACTION_BONUS: f64 = 30.0;
const METRIC_BONUS: f64 = 20.0;
const LIST_ONLY_PENALTY: f64 = 20.0;

/// Judge whether a keyword's occurrences sit near action verbs or
/// quantified metrics, or only appear in bare lists.
///
/// "Python" in "Developed Python services cutting costs 40%" outranks
/// "Python" in "Skills: Python".
pub fn analyze_context(text: &str, keyword: &str) -> ContextAnalysis {
    let lower = text.to_lowercase();
    let keyword_lower = keyword.to_lowercase();
    let matcher = TermMatcher::new(&keyword_lower);

    let mut in_action_context = false;
    let mut in_metric_context = false;
    let mut in_list_only = true;

    for offset in matcher.find_offsets(&lower) {
        let window = window_around(&lower, offset, keyword_lower.len());

        if ACTION_VERBS.iter().any(|verb| window.contains(verb)) {
            in_action_context = true;
            in_list_only = false;
        }
        if METRIC_PATTERNS.iter().any(|p| p.is_match(window)) {
            in_metric_context = true;
            in_list_only = false;
        }
    }

    let mut score = BASE_SCORE;
    if in_action_context {
        score += ACTION_BONUS;
    }
    if in_metric_context {
        score += METRIC_BONUS;
    }
    if in_list_only {
        score -= LIST_ONLY_PENALTY;
    }

    ContextAnalysis {
        keyword: keyword.to_string(),
        in_action_context,
        in_metric_context,
        in_list_only,
        context_score: score.clamp(0.0, 100.0),
    }
}

/// Mean context score across keywords.
pub fn mean_context_score(text: &str, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    keywords
        .iter()
        .map(|kw| analyze_context(text, kw).context_score)
        .sum::<f64>()
        / keywords.len() as f64
}

fn window_around(text: &str, offset: usize, keyword_len: usize) -> &str {
    let mut start = offset.saturating_sub(WINDOW);
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (offset + keyword_len + WINDOW).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_verb_nearby_sets_action_context() {
        let result = analyze_context("Developed Python microservices for the platform", "python");
        assert!(result.in_action_context);
        assert!(!result.in_list_only);
        assert_eq!(result.context_score, 80.0);
    }

    #[test]
    fn metric_nearby_sets_metric_context() {
        let result = analyze_context("Python jobs processed 2M records, up 40%", "python");
        assert!(result.in_metric_context);
        assert!(!result.in_list_only);
    }

    #[test]
    fn action_plus_metric_reaches_hundred() {
        let result = analyze_context("Optimized Python pipeline, cutting runtime by 60%", "python");
        assert!(result.in_action_context);
        assert!(result.in_metric_context);
        assert_eq!(result.context_score, 100.0);
    }

    #[test]
    fn bare_list_is_penalized() {
        let result = analyze_context("Skills: Python, Rust, Go", "python");
        assert!(result.in_list_only);
        assert!(!result.in_action_context);
        assert_eq!(result.context_score, 30.0);
    }

    #[test]
    fn any_occurrence_in_context_clears_list_only() {
        // Listed once, used meaningfully once
        let text = "Skills: Python\nExperience: built Python services";
        let result = analyze_context(text, "python");
        assert!(result.in_action_context);
        assert!(!result.in_list_only);
    }

    #[test]
    fn absent_keyword_counts_as_list_only() {
        let result = analyze_context("unrelated text entirely", "python");
        assert!(result.in_list_only);
        assert_eq!(result.context_score, 30.0);
    }

    #[test]
    fn window_is_bounded() {
        // Action verb far outside the ±50-char window must not count
        let filler = "x".repeat(120);
        let text = format!("developed {filler} python");
        let result = analyze_context(&text, "python");
        assert!(!result.in_action_context);
    }

    #[test]
    fn mean_context_empty_keywords() {
        assert_eq!(mean_context_score("text", &[]), 0.0);
    }
}
