use vitae_core::{FactorScores, Industry, IndustryFit};
use vitae_lexicon::IndustryCatalog;

/// Detect the most likely industry from curated-keyword overlap.
///
/// Counts case-insensitive substring hits of each industry's critical
/// keywords; the highest nonzero count wins, otherwise General. General
/// itself has no critical keywords, so it never competes.
pub fn detect_industry(text: &str, catalog: &IndustryCatalog) -> Industry {
    let lower = text.to_lowercase();

    let mut best = Industry::General;
    let mut best_count = 0usize;

    for profile in catalog.profiles() {
        let count = profile
            .critical_keywords
            .iter()
            .filter(|kw| lower.contains(&kw.to_lowercase()))
            .count();
        if count > best_count {
            best = profile.industry;
            best_count = count;
        }
    }

    tracing::debug!(industry = %best, hits = best_count, "industry detected");
    best
}

/// Industry-adjusted composite: the profile's weight vector applied to the
/// raw factor scores, with the fit band derived from the total.
pub fn industry_score(
    factors: &FactorScores,
    industry: Industry,
    catalog: &IndustryCatalog,
) -> (f64, IndustryFit) {
    let profile = catalog.get(industry);
    let total = profile.weights.apply(factors);
    let total = (total * 10.0).round() / 10.0;
    (total, IndustryFit::from_score(total))
}
