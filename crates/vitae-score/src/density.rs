use crate::pattern::TermMatcher;
use crate::text::whitespace_word_count;
use vitae_core::{DensityResult, PriorityTier};

/// Optimal density band (percent of total words) for a priority tier.
struct DensityRange {
    min: f64,
    max: f64,
    optimal: f64,
}

/// Overuse starts at 1.5× the band ceiling.
const OVERUSE_FACTOR: f64 = 1.5;

fn range_for(priority: PriorityTier) -> DensityRange {
    match priority {
        PriorityTier::Critical => DensityRange { min: 0.5, max: 1.5, optimal: 1.0 },
        PriorityTier::Important => DensityRange { min: 0.3, max: 1.0, optimal: 0.6 },
        PriorityTier::NiceToHave => DensityRange { min: 0.2, max: 0.7, optimal: 0.4 },
    }
}

/// Measure each keyword's frequency against its tier's optimal band.
///
/// The density score is unimodal: 0 when absent, 90-100 inside the band,
/// ramping up to the band from below, and decaying past it into the
/// stuffing region.
pub fn analyze_density(text: &str, keywords: &[String], priority: PriorityTier) -> Vec<DensityResult> {
    let lower = text.to_lowercase();
    let total_words = whitespace_word_count(&lower).max(1);
    let range = range_for(priority);

    keywords
        .iter()
        .map(|keyword| analyze_one(&lower, keyword, total_words, &range))
        .collect()
}

/// Density of a single keyword at a given tier.
pub fn keyword_density(text: &str, keyword: &str, priority: PriorityTier) -> DensityResult {
    let lower = text.to_lowercase();
    let total_words = whitespace_word_count(&lower).max(1);
    analyze_one(&lower, keyword, total_words, &range_for(priority))
}

fn analyze_one(
    lower: &str,
    keyword: &str,
    total_words: usize,
    range: &DensityRange,
) -> DensityResult {
    let count = TermMatcher::new(&keyword.to_lowercase()).count(lower);
    let density = (count as f64 / total_words as f64) * 100.0;

    let is_optimal = density >= range.min && density <= range.max;
    let is_overused = density > range.max * OVERUSE_FACTOR;
    let is_underused = count == 0;

    let density_score = if is_underused {
        0.0
    } else if is_overused {
        (70.0 - (density - range.max) * 10.0).max(0.0)
    } else if is_optimal {
        let position = (density - range.min) / (range.max - range.min);
        90.0 + position * 10.0
    } else if density < range.min {
        50.0 + (density / range.min) * 40.0
    } else {
        // Above the band but below the overuse threshold
        let excess = (density - range.max) / range.max;
        80.0 - excess * 30.0
    };

    DensityResult {
        keyword: keyword.to_string(),
        count,
        density,
        optimal_density: range.optimal,
        is_optimal,
        is_overused,
        is_underused,
        density_score: density_score.round(),
    }
}
