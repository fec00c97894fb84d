use crate::pattern::TermMatcher;
use vitae_lexicon::{
    ACTION_VERBS, GROWTH_WORDS, POWER_PHRASE_PATTERNS, QUALITY_METRIC_PATTERNS, WEAK_PHRASES,
};

/// Resumes shorter than this carry too little signal to score.
const MIN_TEXT_LEN: usize = 50;

/// Internal scale before normalization; matches the component budgets
/// below (metrics 12 + sentiment 18 + length 6 + summary 2 + headers 4).
const RAW_CAP: f64 = 30.0;

/// Content completeness: are achievements quantified, phrased with strong
/// verbs, and organized into the expected structure? 0-100.
pub fn completeness_score(text: &str) -> f64 {
    if text.trim().len() < MIN_TEXT_LEN {
        return 0.0;
    }

    let mut raw = 0.0;

    // Quality-weighted metrics: a 150% claim outranks a 5% one
    let metric_quality: u32 = QUALITY_METRIC_PATTERNS
        .iter()
        .map(|(pattern, quality)| pattern.find_iter(text).count() as u32 * quality)
        .sum();
    raw += match metric_quality {
        60.. => 12.0,
        40..=59 => 10.0,
        25..=39 => 7.0,
        15..=24 => 5.0,
        8..=14 => 3.0,
        3..=7 => 1.0,
        _ => 0.0,
    };

    // Sentiment: strong verbs and power phrases up, weak phrasing down
    let verb_count: usize = ACTION_VERBS
        .iter()
        .map(|verb| TermMatcher::new(verb).count(text))
        .sum();
    let mut sentiment = match verb_count {
        12.. => 10.0,
        8..=11 => 8.0,
        5..=7 => 5.0,
        2..=4 => 2.0,
        _ => 0.0,
    };

    let power_phrases: usize = POWER_PHRASE_PATTERNS
        .iter()
        .map(|p| p.find_iter(text).count())
        .sum();
    sentiment += power_phrases as f64 * 2.0;

    let weak_count: usize = WEAK_PHRASES
        .iter()
        .map(|phrase| TermMatcher::new(phrase).count(text))
        .sum();
    sentiment -= weak_count as f64 * 0.8;

    let lower = text.to_lowercase();
    let growth = GROWTH_WORDS.iter().filter(|w| lower.contains(*w)).count();
    sentiment += growth as f64 * 0.7;

    raw += sentiment.clamp(0.0, 18.0);

    // Length and structure
    raw += match text.len() {
        2001.. => 6.0,
        1501..=2000 => 5.0,
        801..=1500 => 3.0,
        _ => 0.0,
    };

    if TermMatcher::new("summary").is_match(text)
        || TermMatcher::new("objective").is_match(text)
        || TermMatcher::new("profile").is_match(text)
    {
        raw += 2.0;
    }

    let headers = ["experience", "education", "skills", "projects", "certifications"]
        .iter()
        .filter(|h| TermMatcher::new(h).is_match(text))
        .count();
    raw += (headers as f64).min(4.0);

    (raw.min(RAW_CAP) / RAW_CAP * 100.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_scores_zero() {
        assert_eq!(completeness_score(""), 0.0);
        assert_eq!(completeness_score("too short"), 0.0);
    }

    #[test]
    fn quantified_achievements_outscore_duty_lists() {
        let strong = "Summary\nExperience\nDeveloped the billing platform and increased \
                      revenue by 150%. Reduced infrastructure spend, saved $2m annually. \
                      Led a team of 8. Launched the product ahead of schedule. Skills\n\
                      Education\nProjects\nCertifications";
        let weak = "Experience\nResponsible for the billing platform. Duties included \
                    maintenance. Worked on infrastructure. Helped with releases. \
                    Participated in planning meetings across the organization.";
        let strong_score = completeness_score(strong);
        let weak_score = completeness_score(weak);
        assert!(
            strong_score > weak_score,
            "strong {strong_score} vs weak {weak_score}"
        );
    }

    #[test]
    fn action_verbs_raise_the_score() {
        let base = "A plain description of a job history with enough length to score.";
        let verbs = "Developed built created designed implemented led managed optimized \
                     improved increased reduced delivered launched deployed the system.";
        assert!(completeness_score(verbs) > completeness_score(base));
    }

    #[test]
    fn score_is_bounded() {
        let maxed = format!(
            "Summary Experience Education Skills Projects Certifications {} increased \
             revenue by 150% saved $5m led a team of 20 {}",
            "developed built created designed implemented led managed optimized ".repeat(4),
            "increased output by 40% reduced costs by 35% grew usage 3x ".repeat(20),
        );
        let score = completeness_score(&maxed);
        assert!(score <= 100.0);
        assert!(score >= 90.0);
    }
}
