//! Shared lexicon for the Vitae scoring engine.
//!
//! One versioned home for every word list and pattern the scorers share:
//! stop words, action verbs, proficiency/experience terms, metric regexes,
//! the synonym map, category keyword lists, and industry profiles. The
//! keyword and industry tables are data (embedded JSON, reloadable from
//! external files), not code.

mod catalog;
mod industry;
mod skills;

pub use catalog::{KeywordCatalog, RoleCategory, SynonymCatalog};
pub use industry::{FactorWeights, IndustryCatalog, IndustryProfile};
pub use skills::{SkillClass, classify_skill};

use regex::Regex;
use std::sync::LazyLock;

/// Stop words excluded from term extraction. Sorted for binary search.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "an", "and", "are", "at", "be", "been",
    "before", "being", "below", "both", "but", "by", "can", "could", "did", "do", "does", "down",
    "during", "each", "few", "for", "from", "further", "had", "has", "have", "here", "how", "in",
    "into", "is", "may", "might", "more", "most", "must", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "our", "out", "over", "own", "same", "should", "so", "some",
    "such", "than", "that", "the", "their", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "up", "very", "was", "we", "were", "when", "where", "why",
    "will", "with", "would", "you", "your",
];

/// Action verbs that indicate meaningful use of a skill.
pub const ACTION_VERBS: &[&str] = &[
    "developed", "built", "created", "designed", "implemented", "architected", "led", "managed",
    "coordinated", "optimized", "improved", "increased", "reduced", "achieved", "delivered",
    "launched", "deployed", "migrated",
];

/// Words signalling demonstrated proficiency near a skill.
pub const PROFICIENCY_TERMS: &[&str] = &[
    "expert", "proficient", "advanced", "senior", "lead", "principal", "skilled", "specialized",
];

/// Nouns that give a skill mention experience context.
pub const EXPERIENCE_TERMS: &[&str] = &[
    "experience", "project", "system", "solution", "platform", "application",
];

/// Passive phrasing that weakens achievement descriptions.
pub const WEAK_PHRASES: &[&str] = &[
    "responsible for", "duties included", "worked on", "helped with", "assisted in",
    "attempted to", "tried to", "participated in", "familiar with", "exposure to", "involved in",
    "contributed to",
];

/// Words signalling growth and learning.
pub const GROWTH_WORDS: &[&str] = &[
    "learned", "adapted", "upskilled", "certified", "trained", "mentored", "volunteered",
    "developed", "mastered", "acquired", "earned",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

/// Quantified-impact patterns used for context windows: percentages,
/// dollar amounts, 10k/5M counts, and user/customer counts.
pub static METRIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d+%",
        r"\$[\d,]+",
        r"\b\d+[kKmMbB]\b",
        r"(?i)\d+\s*(users?|customers?|clients?)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("metric pattern"))
    .collect()
});

/// Broader metric patterns used when counting distinct impact mentions.
pub static IMPACT_METRIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d+(?:\.\d+)?%",
        r"(?i)\$[\d,]+(?:\.\d+)?[kmb]?",
        r"(?i)\b\d+x\b",
        r"\b\d+(?:,\d{3})+\b",
        r"(?i)\b\d+\+?\s*(?:years?|months?|weeks?|days?)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("impact metric pattern"))
    .collect()
});

/// Metric patterns tiered by how impressive the claim is, with the points
/// each match contributes to the completeness score.
pub static QUALITY_METRIC_PATTERNS: LazyLock<Vec<(Regex, u32)>> = LazyLock::new(|| {
    [
        // Exceptional
        (r"(?i)\b(increased|grew|boosted)\s+[^.]*?(\d{2,3}%|\d+x)", 5),
        (r"(?i)\b(reduced|saved|decreased)\s+[^.]*?\$[\d,]+(?:k|m|b)", 5),
        (r"(?i)\b(managed|oversaw|led)\s+[^.]*?\$[\d,]+(?:m|b)", 5),
        (r"(?i)\b(built|developed|created)\s+[^.]*?(million|billion)\b", 5),
        // Strong
        (r"\b\d{2}%", 3),
        (r"(?i)\$[\d,]+k\b", 3),
        (r"(?i)\b\d+\+?\s*(thousand|hundred)\b", 3),
        (r"(?i)\b(team|group)\s+of\s+\d+", 3),
        // Moderate
        (r"\b\d%", 2),
        (r"(?i)\b\d+\+?\s*(users|customers|clients)", 2),
        // Weak
        (r"(?i)\b(experience|worked)\s+[^.]*?\d+\s*(years?|months?)", 1),
    ]
    .iter()
    .map(|(p, q)| (Regex::new(p).expect("quality metric pattern"), *q))
    .collect()
});

/// Achievement phrasings that pair a strong verb with a measurable result.
pub static POWER_PHRASE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(increased|reduced|improved|grew|saved|generated|boosted|maximized|minimized)\b.{0,40}(\d+%|\$\d+|\d+x)",
        r"(?i)\b(achieved|delivered|completed|exceeded|surpassed)\b.{0,40}\b(under budget|ahead of schedule|on time|\d+%)",
        r"(?i)\b(led|managed|spearheaded|directed|orchestrated)\b.{0,40}\b(team|project|initiative|program)\b",
        r"(?i)\b(launched|deployed|shipped|released)\b.{0,40}\b(product|feature|service|platform)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("power phrase pattern"))
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_are_sorted() {
        let mut sorted = STOP_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, STOP_WORDS);
    }

    #[test]
    fn stop_word_lookup() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("would"));
        assert!(!is_stop_word("python"));
        assert!(!is_stop_word("kubernetes"));
    }

    #[test]
    fn metric_patterns_match_common_forms() {
        let hits = |text: &str| METRIC_PATTERNS.iter().any(|p| p.is_match(text));
        assert!(hits("cut latency by 40%"));
        assert!(hits("saved $1,200,000"));
        assert!(hits("scaled to 10k requests"));
        assert!(hits("served 500 users"));
        assert!(!hits("no numbers here"));
    }

    #[test]
    fn impact_metrics_cover_durations() {
        assert!(IMPACT_METRIC_PATTERNS.iter().any(|p| p.is_match("5 years")));
        assert!(IMPACT_METRIC_PATTERNS.iter().any(|p| p.is_match("3x")));
        assert!(IMPACT_METRIC_PATTERNS.iter().any(|p| p.is_match("12,000")));
    }

    #[test]
    fn quality_metrics_rank_exceptional_above_weak() {
        let score = |text: &str| -> u32 {
            QUALITY_METRIC_PATTERNS
                .iter()
                .map(|(p, q)| p.find_iter(text).count() as u32 * q)
                .sum()
        };
        let exceptional = score("increased revenue by 150%");
        let weak = score("worked there for 3 years");
        assert!(exceptional > weak);
    }

    #[test]
    fn power_phrases_detected() {
        assert!(
            POWER_PHRASE_PATTERNS
                .iter()
                .any(|p| p.is_match("reduced build times by 60%"))
        );
        assert!(
            POWER_PHRASE_PATTERNS
                .iter()
                .any(|p| p.is_match("led a team of engineers"))
        );
    }
}
