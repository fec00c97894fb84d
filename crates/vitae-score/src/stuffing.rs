use crate::density::analyze_density;
use vitae_core::{PriorityTier, StuffingReport};

/// Three or more overused keywords reads as deliberate manipulation.
const STUFFING_THRESHOLD: usize = 3;
/// Penalty per stuffed keyword, capped.
const PENALTY_PER_KEYWORD: f64 = 5.0;
const MAX_PENALTY: f64 = 30.0;

/// Aggregate density overuse into a bounded penalty.
///
/// Runs the density analyzer at the critical tier (the strictest band)
/// and maps the overused count onto a 0-30 point penalty.
pub fn detect_stuffing(text: &str, keywords: &[String]) -> StuffingReport {
    let stuffed_keywords: Vec<String> = analyze_density(text, keywords, PriorityTier::Critical)
        .into_iter()
        .filter(|r| r.is_overused)
        .map(|r| r.keyword)
        .collect();

    let penalty = match stuffed_keywords.len() {
        0 => 0.0,
        1 => 5.0,
        2 => 10.0,
        n => (n as f64 * PENALTY_PER_KEYWORD).min(MAX_PENALTY),
    };

    StuffingReport {
        is_stuffing: stuffed_keywords.len() >= STUFFING_THRESHOLD,
        stuffed_keywords,
        penalty,
    }
}
