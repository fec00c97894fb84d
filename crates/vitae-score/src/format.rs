use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use vitae_lexicon::IMPACT_METRIC_PATTERNS;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern")
});

static PHONE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\+\d{1,3}[-.\s]?\(?\d{1,4}\)?[-.\s]?\d{1,4}[-.\s]?\d{1,9}",
        r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("phone pattern"))
    .collect()
});

static LINKEDIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+|\blinkedin\b").expect("linkedin"));

static GITHUB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)github\.com/[\w-]+|\bgithub\b").expect("github"));

static PORTFOLIO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bportfolio\b|https?://[\w.-]+\.(dev|io|me|tech)\b").expect("portfolio")
});

static SECTION_HEADER_HINTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bexperience\b",
        r"(?i)\beducation\b",
        r"(?i)\bskills\b",
        r"(?i)\bprojects\b",
        r"(?i)\bcertifications?\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("header hint"))
    .collect()
});

/// ATS-friendliness of the document surface: reachable contact details,
/// recognizable section structure, and enough content to parse. 0-100.
pub fn format_score(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }

    let mut score = 0.0;

    if EMAIL.is_match(text) {
        score += 20.0;
    }
    if PHONE.iter().any(|p| p.is_match(text)) {
        score += 15.0;
    }
    if LINKEDIN.is_match(text) {
        score += 10.0;
    }
    if GITHUB.is_match(text) {
        score += 10.0;
    }
    if PORTFOLIO.is_match(text) {
        score += 5.0;
    }

    let headers = SECTION_HEADER_HINTS.iter().filter(|p| p.is_match(text)).count();
    score += (headers as f64 * 4.0).min(20.0);

    score += match text.len() {
        0..=300 => 5.0,
        301..=800 => 10.0,
        801..=1500 => 15.0,
        _ => 20.0,
    };

    score.min(100.0)
}

/// Count distinct quantified-impact mentions: percentages, dollar amounts,
/// multipliers, large counts, and durations.
pub fn count_impact_metrics(text: &str) -> usize {
    let mut found: HashSet<String> = HashSet::new();
    for pattern in IMPACT_METRIC_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            found.insert(m.as_str().to_lowercase());
        }
    }
    found.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "\
Jane Doe — jane.doe@example.com — +1 415-555-0100
linkedin.com/in/janedoe — github.com/janedoe

Experience
Led teams. Increased revenue 40%, saved $200K, shipped 3x faster.

Skills
Rust, Python

Education
BSc

Certifications
AWS
";

    #[test]
    fn complete_resume_scores_high() {
        assert!(format_score(FULL) >= 75.0);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(format_score(""), 0.0);
        assert_eq!(format_score("   \n"), 0.0);
    }

    #[test]
    fn missing_contact_info_costs_points() {
        let with = format_score(FULL);
        let without = format_score(&FULL.replace("jane.doe@example.com", "").replace(
            "+1 415-555-0100",
            "",
        ));
        assert!(with > without);
    }

    #[test]
    fn impact_metrics_are_distinct() {
        let count = count_impact_metrics("grew 40%, grew 40%, saved $200K, 3x faster, 5 years");
        assert_eq!(count, 4);
    }

    #[test]
    fn no_metrics_counts_zero() {
        assert_eq!(count_impact_metrics("no numbers in this text"), 0);
    }
}
