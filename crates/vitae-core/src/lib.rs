//! Vitae core domain types, result structs, and errors.

mod error;
mod types;

pub use error::VitaeError;
pub use types::{
    Analysis, AnalysisFlag, Bm25Config, Confidence, ContextAnalysis, ContextualMatch,
    DeepSimilarityScore, DensityResult, EducationLevel, Factor, FactorImpact, FactorScores,
    FactorStatus, Industry, IndustryFit, KeywordDetail, MatchImportance, Prediction,
    PredictionParams, PriorityTier, QuickScore, RelevanceResult, RelevanceTier, ScoreBreakdown,
    Section, SectionMap, SectionWeightedScore, StuffingReport, Term, TermCategory, letter_grade,
};

#[cfg(test)]
mod tests {
    use super::*;

    // --- PriorityTier ---

    #[test]
    fn priority_tier_display() {
        assert_eq!(format!("{}", PriorityTier::Critical), "critical");
        assert_eq!(format!("{}", PriorityTier::NiceToHave), "nice-to-have");
    }

    // --- Section ---

    #[test]
    fn section_as_str() {
        assert_eq!(Section::Experience.as_str(), "experience");
        assert_eq!(Section::Certifications.as_str(), "certifications");
        assert_eq!(Section::Other.as_str(), "other");
    }

    #[test]
    fn section_all_has_seven_entries() {
        assert_eq!(Section::ALL.len(), 7);
    }

    // --- SectionMap ---

    #[test]
    fn section_map_starts_empty() {
        let map = SectionMap::new();
        assert!(map.is_empty());
        assert_eq!(map.text(Section::Experience), "");
    }

    #[test]
    fn section_map_preserves_line_order() {
        let mut map = SectionMap::new();
        map.push_line(Section::Experience, "built the api");
        map.push_line(Section::Experience, "led the migration");
        assert_eq!(
            map.text(Section::Experience),
            "built the api\nled the migration\n"
        );
        assert!(!map.is_empty());
    }

    // --- RelevanceTier ---

    #[test]
    fn relevance_tier_thresholds() {
        assert_eq!(RelevanceTier::from_score(8.1), RelevanceTier::Critical);
        assert_eq!(RelevanceTier::from_score(8.0), RelevanceTier::Important);
        assert_eq!(RelevanceTier::from_score(5.0), RelevanceTier::Moderate);
        assert_eq!(RelevanceTier::from_score(2.0), RelevanceTier::Low);
        assert_eq!(RelevanceTier::from_score(0.0), RelevanceTier::Low);
    }

    // --- IndustryFit ---

    #[test]
    fn industry_fit_bands() {
        assert_eq!(IndustryFit::from_score(85.0), IndustryFit::Excellent);
        assert_eq!(IndustryFit::from_score(70.0), IndustryFit::Good);
        assert_eq!(IndustryFit::from_score(55.0), IndustryFit::Fair);
        assert_eq!(IndustryFit::from_score(54.9), IndustryFit::Poor);
    }

    // --- Industry ---

    #[test]
    fn industry_from_str_case_insensitive() {
        let industry: Industry = "healthcare".parse().unwrap();
        assert_eq!(industry, Industry::Healthcare);
        assert!("biotech".parse::<Industry>().is_err());
    }

    // --- letter_grade ---

    #[test]
    fn letter_grade_bands() {
        assert_eq!(letter_grade(97.0), "A+");
        assert_eq!(letter_grade(90.0), "A");
        assert_eq!(letter_grade(84.9), "B");
        assert_eq!(letter_grade(75.0), "C+");
        assert_eq!(letter_grade(60.0), "D");
        assert_eq!(letter_grade(0.0), "F");
    }

    // --- Bm25Config ---

    #[test]
    fn bm25_config_default_is_clean() {
        let (config, replaced) = Bm25Config::default().sanitized();
        assert_eq!(config, Bm25Config::default());
        assert!(!replaced);
    }

    #[test]
    fn bm25_config_rejects_bad_values() {
        let (config, replaced) = Bm25Config { k1: -1.0, b: 0.75 }.sanitized();
        assert_eq!(config.k1, 1.5);
        assert_eq!(config.b, 0.75);
        assert!(replaced);

        let (config, replaced) = Bm25Config { k1: 1.2, b: 2.0 }.sanitized();
        assert_eq!(config.k1, 1.2);
        assert_eq!(config.b, 0.75);
        assert!(replaced);
    }

    // --- MatchImportance ---

    #[test]
    fn match_importance_tiers() {
        assert_eq!(MatchImportance::from_weighted(0.85), MatchImportance::Critical);
        assert_eq!(MatchImportance::from_weighted(0.70), MatchImportance::High);
        assert_eq!(MatchImportance::from_weighted(0.55), MatchImportance::Medium);
        assert_eq!(MatchImportance::from_weighted(0.10), MatchImportance::Low);
    }

    // --- EducationLevel ---

    #[test]
    fn education_rank_ordering() {
        assert!(EducationLevel::Phd.rank() > EducationLevel::Bachelors.rank());
        assert_eq!(EducationLevel::HighSchool.rank(), 0);
    }

    // --- VitaeError ---

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: VitaeError = io_err.into();
        assert!(err.to_string().contains("not found"));
    }
}
