use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Priority tier of a keyword relative to the target role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityTier {
    Critical,
    Important,
    NiceToHave,
}

impl PriorityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::NiceToHave => "nice-to-have",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad category of an extracted term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermCategory {
    Technical,
    Soft,
    Tool,
    Industry,
}

/// A candidate term extracted from a job description.
///
/// Immutable once extracted; matching is case-insensitive and
/// word-boundary based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub text: String,
    pub category: TermCategory,
    pub priority: PriorityTier,
}

/// The fixed set of resume sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Summary,
    Experience,
    Skills,
    Education,
    Certifications,
    Projects,
    Other,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Summary,
        Section::Experience,
        Section::Skills,
        Section::Education,
        Section::Certifications,
        Section::Projects,
        Section::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Certifications => "certifications",
            Self::Projects => "projects",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resume text split by section.
///
/// Every line of the source document lands in exactly one section; line
/// order within a section is preserved so downstream context windows see
/// the original text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SectionMap {
    sections: HashMap<Section, String>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to a section's accumulated text.
    pub fn push_line(&mut self, section: Section, line: &str) {
        let buf = self.sections.entry(section).or_default();
        buf.push_str(line);
        buf.push('\n');
    }

    /// Accumulated text for a section (empty string if nothing landed there).
    pub fn text(&self, section: Section) -> &str {
        self.sections.get(&section).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.text(*s).trim().is_empty())
    }
}

/// Relevance tier derived from a BM25 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceTier {
    Critical,
    Important,
    Moderate,
    Low,
}

impl RelevanceTier {
    /// Tier thresholds: >8 critical, >5 important, >2 moderate, else low.
    pub fn from_score(score: f64) -> Self {
        if score > 8.0 {
            Self::Critical
        } else if score > 5.0 {
            Self::Important
        } else if score > 2.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// BM25 relevance of one term against one document.
#[derive(Debug, Clone, Serialize)]
pub struct RelevanceResult {
    pub term: String,
    pub score: f64,
    pub frequency: usize,
    pub document_frequency: usize,
    pub tier: RelevanceTier,
}

/// Keyword frequency measured against its priority tier's optimal range.
#[derive(Debug, Clone, Serialize)]
pub struct DensityResult {
    pub keyword: String,
    pub count: usize,
    /// Percentage of total document words.
    pub density: f64,
    pub optimal_density: f64,
    pub is_optimal: bool,
    pub is_overused: bool,
    pub is_underused: bool,
    /// 0-100, unimodal around the optimal density.
    pub density_score: f64,
}

/// Per-section keyword placement score.
#[derive(Debug, Clone, Serialize)]
pub struct SectionWeightedScore {
    pub keyword: String,
    pub experience_score: f64,
    pub skills_score: f64,
    pub summary_score: f64,
    pub education_score: f64,
    pub other_score: f64,
    pub total_weighted_score: f64,
}

/// Whether a keyword's occurrences sit in meaningful context.
#[derive(Debug, Clone, Serialize)]
pub struct ContextAnalysis {
    pub keyword: String,
    pub in_action_context: bool,
    pub in_metric_context: bool,
    pub in_list_only: bool,
    pub context_score: f64,
}

/// Aggregated keyword-stuffing verdict.
#[derive(Debug, Clone, Serialize)]
pub struct StuffingReport {
    pub is_stuffing: bool,
    pub stuffed_keywords: Vec<String>,
    /// Bounded penalty, 0-30.
    pub penalty: f64,
}

/// Composite score with its sub-scores.
///
/// Invariant: `total_score == clamp(weighted combination - stuffing_penalty, 0, 100)`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub total_score: f64,
    pub density_score: f64,
    pub section_score: f64,
    pub context_score: f64,
    pub stuffing_penalty: f64,
}

/// Recovered-input conditions surfaced to the caller instead of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisFlag {
    EmptyInput,
    NoJobDescription,
    DegenerateCorpus,
    InvalidConfig,
}

/// Everything computed for a single keyword during analysis.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordDetail {
    pub keyword: String,
    pub relevance: RelevanceResult,
    pub density: DensityResult,
    pub placement: SectionWeightedScore,
    pub context: ContextAnalysis,
}

/// The ten supported industries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Technology,
    Finance,
    Healthcare,
    Marketing,
    Consulting,
    Engineering,
    Education,
    Retail,
    Manufacturing,
    General,
}

impl Industry {
    pub const ALL: [Industry; 10] = [
        Industry::Technology,
        Industry::Finance,
        Industry::Healthcare,
        Industry::Marketing,
        Industry::Consulting,
        Industry::Engineering,
        Industry::Education,
        Industry::Retail,
        Industry::Manufacturing,
        Industry::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Finance => "Finance",
            Self::Healthcare => "Healthcare",
            Self::Marketing => "Marketing",
            Self::Consulting => "Consulting",
            Self::Engineering => "Engineering",
            Self::Education => "Education",
            Self::Retail => "Retail",
            Self::Manufacturing => "Manufacturing",
            Self::General => "General",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Industry {
    type Err = crate::VitaeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Industry::ALL
            .iter()
            .copied()
            .find(|i| i.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::VitaeError::InvalidArgument(format!("unknown industry: {s}")))
    }
}

/// How well the composite score fits the detected industry's expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndustryFit {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl IndustryFit {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            Self::Excellent
        } else if score >= 70.0 {
            Self::Good
        } else if score >= 55.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Raw 0-100 sub-scores combined through an industry weight vector.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct FactorScores {
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

/// Full analysis result for one (resume, job description) pair.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub breakdown: ScoreBreakdown,
    pub keywords: Vec<KeywordDetail>,
    pub stuffing: StuffingReport,
    pub industry: Industry,
    pub industry_score: f64,
    pub industry_fit: IndustryFit,
    pub factors: FactorScores,
    pub semantic_similarity: Option<f64>,
    pub flags: Vec<AnalysisFlag>,
}

/// Lightweight score estimate with a letter grade.
#[derive(Debug, Clone, Serialize)]
pub struct QuickScore {
    pub score: f64,
    pub keyword_score: f64,
    pub format_score: f64,
    pub completeness_score: f64,
    pub grade: &'static str,
    pub flags: Vec<AnalysisFlag>,
}

/// Letter grade for a 0-100 score.
pub fn letter_grade(score: f64) -> &'static str {
    if score >= 95.0 {
        "A+"
    } else if score >= 90.0 {
        "A"
    } else if score >= 85.0 {
        "B+"
    } else if score >= 80.0 {
        "B"
    } else if score >= 75.0 {
        "C+"
    } else if score >= 70.0 {
        "C"
    } else if score >= 60.0 {
        "D"
    } else {
        "F"
    }
}

/// BM25 tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Config {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Document-length normalization.
    pub b: f64,
}

impl Default for Bm25Config {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

impl Bm25Config {
    /// Clamp out-of-range parameters back to defaults.
    ///
    /// Returns the sanitized config and whether anything was replaced, so
    /// callers can raise `AnalysisFlag::InvalidConfig`.
    pub fn sanitized(self) -> (Self, bool) {
        let k1_ok = self.k1.is_finite() && self.k1 > 0.0 && self.k1 <= 10.0;
        let b_ok = self.b.is_finite() && (0.0..=1.0).contains(&self.b);
        if k1_ok && b_ok {
            (self, false)
        } else {
            let defaults = Self::default();
            (
                Self {
                    k1: if k1_ok { self.k1 } else { defaults.k1 },
                    b: if b_ok { self.b } else { defaults.b },
                },
                true,
            )
        }
    }
}

/// Similarity importance tier for a sentence pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchImportance {
    Critical,
    High,
    Medium,
    Low,
}

impl MatchImportance {
    /// Thresholds on importance-weighted similarity.
    pub fn from_weighted(weighted: f64) -> Self {
        if weighted >= 0.85 {
            Self::Critical
        } else if weighted >= 0.70 {
            Self::High
        } else if weighted >= 0.55 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// A matched resume/job sentence pair.
#[derive(Debug, Clone, Serialize)]
pub struct ContextualMatch {
    pub resume_phrase: String,
    pub job_phrase: String,
    pub similarity: f64,
    pub importance: MatchImportance,
}

/// Sentence-embedding similarity report.
#[derive(Debug, Clone, Serialize)]
pub struct DeepSimilarityScore {
    /// 0-1 importance-weighted mean cosine similarity.
    pub similarity: f64,
    /// 0-100.
    pub confidence: f64,
    pub semantic_clusters: Vec<String>,
    pub key_phrases: Vec<String>,
    pub contextual_matches: Vec<ContextualMatch>,
}

/// Five-level education ordinal used by the interview predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    HighSchool,
    Associates,
    Bachelors,
    Masters,
    Phd,
}

impl EducationLevel {
    pub fn rank(&self) -> i32 {
        *self as i32
    }
}

/// Inputs to the interview-probability predictor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionParams {
    pub resume_score: f64,
    pub keyword_match_percent: f64,
    pub years_experience: f64,
    pub years_required: f64,
    pub education_level: EducationLevel,
    pub education_required: EducationLevel,
    pub is_remote: bool,
    pub location_match: bool,
    pub days_posted: u32,
    pub has_referral: bool,
    /// 1 = top tier, 5 = unknown startup.
    pub prior_company_tier: u8,
    pub has_portfolio: bool,
}

/// Qualitative weight of a prediction factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorImpact {
    VeryHigh,
    High,
    Medium,
    Low,
}

/// Whether a factor helps or hurts the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Strong,
    Adequate,
    Weak,
}

/// One weighted input to the interview prediction.
#[derive(Debug, Clone, Serialize)]
pub struct Factor {
    pub name: &'static str,
    pub impact: FactorImpact,
    pub score: f64,
    pub weight: f64,
    pub status: FactorStatus,
    pub actionable: String,
}

/// Prediction confidence, driven by how many factors were available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Interview-likelihood prediction.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// Percent chance, always in [2, 95].
    pub probability: f64,
    pub confidence: Confidence,
    /// Ordered by weight, most influential first.
    pub factors: Vec<Factor>,
}
