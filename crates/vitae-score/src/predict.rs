use vitae_core::{
    Confidence, Factor, FactorImpact, FactorStatus, Prediction, PredictionParams,
};

/// Factor weights, tuned to recruiter screening behavior.
const W_RESUME_SCORE: f64 = 0.25;
const W_KEYWORD_MATCH: f64 = 0.20;
const W_EXPERIENCE: f64 = 0.15;
const W_EDUCATION: f64 = 0.10;
const W_LOCATION: f64 = 0.08;
const W_COMPANY_BRAND: f64 = 0.05;
const W_REFERRAL: f64 = 0.05;
const W_TIMING: f64 = 0.03;
const W_PORTFOLIO: f64 = 0.02;

/// A referral doubles the final logit.
const REFERRAL_MULTIPLIER: f64 = 2.0;

/// Logistic transform shape: steepness and midpoint.
const LOGIT_STEEPNESS: f64 = 5.0;
const LOGIT_MIDPOINT: f64 = 0.5;

/// Output is clamped to realistic screening rates.
const MIN_PROBABILITY: f64 = 2.0;
const MAX_PROBABILITY: f64 = 95.0;

/// Predict interview likelihood from the composite score plus external
/// application signals, via a weighted-logit-to-probability transform.
pub fn predict_interview(params: &PredictionParams) -> Prediction {
    let mut factors: Vec<Factor> = Vec::new();

    // Resume composite score
    let resume_impact = params.resume_score / 100.0;
    factors.push(Factor {
        name: "Resume Score",
        impact: if params.resume_score >= 80.0 {
            FactorImpact::VeryHigh
        } else if params.resume_score >= 70.0 {
            FactorImpact::High
        } else {
            FactorImpact::Medium
        },
        score: params.resume_score,
        weight: W_RESUME_SCORE * resume_impact,
        status: status_from(params.resume_score, 75.0, 60.0),
        actionable: if params.resume_score < 75.0 {
            "Optimize the resume to reach a 75+ composite score".to_string()
        } else {
            "Resume score is strong".to_string()
        },
    });

    // Keyword match
    let keyword_impact = params.keyword_match_percent / 100.0;
    factors.push(Factor {
        name: "Job Description Match",
        impact: if params.keyword_match_percent >= 70.0 {
            FactorImpact::VeryHigh
        } else {
            FactorImpact::High
        },
        score: params.keyword_match_percent,
        weight: W_KEYWORD_MATCH * keyword_impact,
        status: status_from(params.keyword_match_percent, 70.0, 50.0),
        actionable: if params.keyword_match_percent < 70.0 {
            "Work more job-description keywords into the resume".to_string()
        } else {
            "Keyword match is excellent".to_string()
        },
    });

    // Experience vs. requirement
    let experience_gap = params.years_experience - params.years_required;
    let experience_impact = if experience_gap >= 0.0 {
        let ratio = (params.years_experience / params.years_required.max(1.0)).min(1.5);
        (ratio / 1.5).min(1.0)
    } else {
        (1.0 - experience_gap.abs() * 0.15).max(0.3)
    };
    factors.push(Factor {
        name: "Experience Level",
        impact: if experience_gap >= 2.0 {
            FactorImpact::VeryHigh
        } else if experience_gap >= 0.0 {
            FactorImpact::High
        } else {
            FactorImpact::Medium
        },
        score: (experience_impact * 100.0).round(),
        weight: W_EXPERIENCE * experience_impact,
        status: if experience_gap >= 0.0 {
            FactorStatus::Strong
        } else if experience_gap >= -2.0 {
            FactorStatus::Adequate
        } else {
            FactorStatus::Weak
        },
        actionable: if experience_gap < 0.0 {
            format!(
                "Emphasize equivalent experience to close a {:.0}-year gap",
                experience_gap.abs()
            )
        } else {
            "Experience matches or exceeds the requirement".to_string()
        },
    });

    // Education vs. requirement
    let education_gap = params.education_level.rank() - params.education_required.rank();
    let education_impact = if education_gap < 0 {
        (1.0 - education_gap.abs() as f64 * 0.15).max(0.4)
    } else {
        // Over-qualification carries no penalty
        1.0
    };
    factors.push(Factor {
        name: "Education Requirement",
        impact: if education_gap >= 0 {
            FactorImpact::High
        } else {
            FactorImpact::Medium
        },
        score: (education_impact * 100.0).round(),
        weight: W_EDUCATION * education_impact,
        status: if education_gap >= 0 {
            FactorStatus::Strong
        } else {
            FactorStatus::Weak
        },
        actionable: if education_gap < 0 {
            "Highlight certifications and experience to offset the education gap".to_string()
        } else {
            "Education meets or exceeds the requirement".to_string()
        },
    });

    // Location: only a factor for on-site roles
    if !params.is_remote {
        let location_impact: f64 = if params.location_match { 1.0 } else { 0.4 };
        factors.push(Factor {
            name: "Location Match",
            impact: if params.location_match {
                FactorImpact::High
            } else {
                FactorImpact::Low
            },
            score: (location_impact * 100.0).round(),
            weight: W_LOCATION * location_impact,
            status: if params.location_match {
                FactorStatus::Strong
            } else {
                FactorStatus::Weak
            },
            actionable: if params.location_match {
                "Location is a good fit".to_string()
            } else {
                "Mention relocation willingness or target remote roles".to_string()
            },
        });
    }

    // Application timing
    let timing_impact: f64 = match params.days_posted {
        0..=3 => 1.2,
        4..=7 => 1.0,
        8..=14 => 0.8,
        _ => 0.5,
    };
    factors.push(Factor {
        name: "Application Timing",
        impact: if params.days_posted <= 3 {
            FactorImpact::High
        } else if params.days_posted <= 7 {
            FactorImpact::Medium
        } else {
            FactorImpact::Low
        },
        score: (timing_impact * 100.0).round(),
        weight: W_TIMING * timing_impact,
        status: if params.days_posted <= 7 {
            FactorStatus::Strong
        } else if params.days_posted <= 14 {
            FactorStatus::Adequate
        } else {
            FactorStatus::Weak
        },
        actionable: if params.days_posted > 7 {
            "Apply within the first week of future postings".to_string()
        } else {
            "Early application works in your favor".to_string()
        },
    });

    // Referral: both a factor and a logit multiplier
    if params.has_referral {
        factors.push(Factor {
            name: "Internal Referral",
            impact: FactorImpact::VeryHigh,
            score: 100.0,
            weight: W_REFERRAL * 2.0,
            status: FactorStatus::Strong,
            actionable: "Referral significantly boosts your chances".to_string(),
        });
    }

    // Prior company pedigree, only notable for the top tiers
    let tier_impact: f64 = match params.prior_company_tier.clamp(1, 5) {
        1 => 1.2,
        2 => 1.1,
        3 => 1.0,
        4 => 0.9,
        _ => 0.8,
    };
    if params.prior_company_tier <= 2 {
        factors.push(Factor {
            name: "Prior Company Pedigree",
            impact: FactorImpact::High,
            score: (tier_impact * 100.0).round(),
            weight: W_COMPANY_BRAND * tier_impact,
            status: FactorStatus::Strong,
            actionable: "Lead with the recognizable company experience".to_string(),
        });
    }

    // Portfolio presence
    if params.has_portfolio {
        factors.push(Factor {
            name: "Portfolio",
            impact: FactorImpact::Medium,
            score: 100.0,
            weight: W_PORTFOLIO,
            status: FactorStatus::Strong,
            actionable: "Portfolio adds credibility".to_string(),
        });
    }

    let base_logit: f64 = factors.iter().map(|f| f.weight).sum();
    let final_logit = if params.has_referral {
        base_logit * REFERRAL_MULTIPLIER
    } else {
        base_logit
    };

    let raw = 1.0 / (1.0 + (-LOGIT_STEEPNESS * (final_logit - LOGIT_MIDPOINT)).exp());
    let probability = (5.0 + raw * 40.0).round().clamp(MIN_PROBABILITY, MAX_PROBABILITY);

    let confidence = if factors.len() >= 7 {
        Confidence::High
    } else if factors.len() >= 5 {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    factors.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));

    tracing::debug!(probability, factors = factors.len(), "interview prediction");

    Prediction {
        probability,
        confidence,
        factors,
    }
}

fn status_from(score: f64, strong: f64, adequate: f64) -> FactorStatus {
    if score >= strong {
        FactorStatus::Strong
    } else if score >= adequate {
        FactorStatus::Adequate
    } else {
        FactorStatus::Weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_core::EducationLevel;

    fn baseline() -> PredictionParams {
        PredictionParams {
            resume_score: 75.0,
            keyword_match_percent: 65.0,
            years_experience: 5.0,
            years_required: 4.0,
            education_level: EducationLevel::Bachelors,
            education_required: EducationLevel::Bachelors,
            is_remote: false,
            location_match: true,
            days_posted: 5,
            has_referral: false,
            prior_company_tier: 3,
            has_portfolio: false,
        }
    }

    #[test]
    fn probability_stays_in_range() {
        let floor = PredictionParams {
            resume_score: 0.0,
            keyword_match_percent: 0.0,
            years_experience: 0.0,
            years_required: 10.0,
            education_level: EducationLevel::HighSchool,
            education_required: EducationLevel::Phd,
            is_remote: false,
            location_match: false,
            days_posted: 60,
            has_referral: false,
            prior_company_tier: 5,
            has_portfolio: false,
        };
        let low = predict_interview(&floor);
        assert!(low.probability >= 2.0);

        let ceiling = PredictionParams {
            resume_score: 100.0,
            keyword_match_percent: 100.0,
            years_experience: 10.0,
            years_required: 3.0,
            education_level: EducationLevel::Phd,
            education_required: EducationLevel::Bachelors,
            is_remote: true,
            location_match: true,
            days_posted: 1,
            has_referral: true,
            prior_company_tier: 1,
            has_portfolio: true,
        };
        let high = predict_interview(&ceiling);
        assert!(high.probability <= 95.0);
        assert!(high.probability > low.probability);
    }

    #[test]
    fn referral_strictly_increases_probability() {
        let without = predict_interview(&baseline());
        let with = predict_interview(&PredictionParams {
            has_referral: true,
            ..baseline()
        });
        assert!(with.probability > without.probability);
    }

    #[test]
    fn remote_roles_skip_the_location_factor() {
        let onsite = predict_interview(&baseline());
        let remote = predict_interview(&PredictionParams {
            is_remote: true,
            ..baseline()
        });
        assert!(onsite.factors.iter().any(|f| f.name == "Location Match"));
        assert!(!remote.factors.iter().any(|f| f.name == "Location Match"));
    }

    #[test]
    fn under_experience_weakens_the_factor() {
        let under = predict_interview(&PredictionParams {
            years_experience: 1.0,
            years_required: 8.0,
            ..baseline()
        });
        let factor = under
            .factors
            .iter()
            .find(|f| f.name == "Experience Level")
            .unwrap();
        assert_eq!(factor.status, FactorStatus::Weak);

        let over = predict_interview(&baseline());
        let over_factor = over
            .factors
            .iter()
            .find(|f| f.name == "Experience Level")
            .unwrap();
        assert!(over_factor.score > factor.score);
    }

    #[test]
    fn confidence_tracks_factor_count() {
        // Six factors for an on-site, no-extras application
        let base = predict_interview(&baseline());
        assert_eq!(base.factors.len(), 6);
        assert_eq!(base.confidence, Confidence::Medium);

        let full = predict_interview(&PredictionParams {
            has_referral: true,
            prior_company_tier: 1,
            has_portfolio: true,
            ..baseline()
        });
        assert!(full.factors.len() >= 7);
        assert_eq!(full.confidence, Confidence::High);
    }

    #[test]
    fn factors_sorted_by_weight() {
        let result = predict_interview(&baseline());
        for pair in result.factors.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
    }

    #[test]
    fn late_applications_score_lower_timing() {
        let early = predict_interview(&PredictionParams {
            days_posted: 1,
            ..baseline()
        });
        let late = predict_interview(&PredictionParams {
            days_posted: 30,
            ..baseline()
        });
        let timing = |p: &Prediction| {
            p.factors
                .iter()
                .find(|f| f.name == "Application Timing")
                .unwrap()
                .score
        };
        assert!(timing(&early) > timing(&late));
    }
}
