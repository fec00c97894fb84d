use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;
use vitae_core::{FactorScores, Industry, VitaeError};

/// Nine-factor weight vector; each profile's weights sum to ≈1.0.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FactorWeights {
    pub keywords: f64,
    pub metrics: f64,
    pub certifications: f64,
    pub education: f64,
    pub experience: f64,
    pub technical_skills: f64,
    pub soft_skills: f64,
    pub action_verbs: f64,
    pub formatting: f64,
}

impl FactorWeights {
    /// Weighted combination of raw 0-100 sub-scores.
    pub fn apply(&self, scores: &FactorScores) -> f64 {
        self.keywords * scores.keywords
            + self.metrics * scores.metrics
            + self.certifications * scores.certifications
            + self.education * scores.education
            + self.experience * scores.experience
            + self.technical_skills * scores.technical_skills
            + self.soft_skills * scores.soft_skills
            + self.action_verbs * scores.action_verbs
            + self.formatting * scores.formatting
    }

    pub fn sum(&self) -> f64 {
        self.keywords
            + self.metrics
            + self.certifications
            + self.education
            + self.experience
            + self.technical_skills
            + self.soft_skills
            + self.action_verbs
            + self.formatting
    }
}

/// Static configuration for one industry.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustryProfile {
    pub industry: Industry,
    pub weights: FactorWeights,
    pub critical_keywords: Vec<String>,
    pub preferred_metrics: Vec<String>,
    pub red_flags: Vec<String>,
    pub bonus_factors: Vec<String>,
}

/// All industry profiles, loaded from JSON data.
#[derive(Debug, Clone)]
pub struct IndustryCatalog {
    profiles: Vec<IndustryProfile>,
}

static BUILTIN_INDUSTRIES: LazyLock<IndustryCatalog> = LazyLock::new(|| {
    IndustryCatalog::from_json(include_str!("../data/industries.json"))
        .expect("embedded industry catalog")
});

impl IndustryCatalog {
    pub fn builtin() -> &'static Self {
        &BUILTIN_INDUSTRIES
    }

    pub fn from_path(path: &Path) -> Result<Self, VitaeError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn from_json(json: &str) -> Result<Self, VitaeError> {
        let profiles: Vec<IndustryProfile> = serde_json::from_str(json)?;
        for industry in Industry::ALL {
            if !profiles.iter().any(|p| p.industry == industry) {
                return Err(VitaeError::Catalog(format!(
                    "missing profile for industry: {industry}"
                )));
            }
        }
        Ok(Self { profiles })
    }

    pub fn profiles(&self) -> &[IndustryProfile] {
        &self.profiles
    }

    pub fn get(&self, industry: Industry) -> &IndustryProfile {
        // from_json guarantees every industry has a profile
        self.profiles
            .iter()
            .find(|p| p.industry == industry)
            .expect("complete catalog")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_all_ten_industries() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(catalog.profiles().len(), 10);
        for industry in Industry::ALL {
            let _ = catalog.get(industry);
        }
    }

    #[test]
    fn weights_sum_to_one() {
        for profile in IndustryCatalog::builtin().profiles() {
            let sum = profile.weights.sum();
            assert!(
                (sum - 1.0).abs() < 0.02,
                "{} weights sum to {sum}",
                profile.industry
            );
        }
    }

    #[test]
    fn general_has_no_critical_keywords() {
        let general = IndustryCatalog::builtin().get(Industry::General);
        assert!(general.critical_keywords.is_empty());
    }

    #[test]
    fn apply_is_a_dot_product() {
        let weights = IndustryCatalog::builtin().get(Industry::Technology).weights;
        let uniform = FactorScores {
            keywords: 80.0,
            metrics: 80.0,
            certifications: 80.0,
            education: 80.0,
            experience: 80.0,
            technical_skills: 80.0,
            soft_skills: 80.0,
            action_verbs: 80.0,
            formatting: 80.0,
        };
        let total = weights.apply(&uniform);
        assert!((total - 80.0).abs() < 2.0);
    }

    #[test]
    fn incomplete_catalog_rejected() {
        let one_profile = r#"[{
            "industry": "Technology",
            "weights": {
                "keywords": 1.0, "metrics": 0.0, "certifications": 0.0,
                "education": 0.0, "experience": 0.0, "technical_skills": 0.0,
                "soft_skills": 0.0, "action_verbs": 0.0, "formatting": 0.0
            },
            "critical_keywords": [], "preferred_metrics": [],
            "red_flags": [], "bonus_factors": []
        }]"#;
        assert!(IndustryCatalog::from_json(one_profile).is_err());
    }
}
