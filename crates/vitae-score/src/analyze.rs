use crate::bm25::RelevanceScorer;
use crate::completeness::completeness_score;
use crate::context::analyze_context;
use crate::density::keyword_density;
use crate::format::{count_impact_metrics, format_score};
use crate::industry::{detect_industry, industry_score};
use crate::pattern::TermMatcher;
use crate::sections::detect_sections;
use crate::semantic::deep_similarity;
use crate::stuffing::detect_stuffing;
use crate::text::whitespace_word_count;
use crate::weighting::score_keyword;
use rayon::prelude::*;
use vitae_core::{
    Analysis, AnalysisFlag, Bm25Config, FactorScores, Industry, IndustryFit, KeywordDetail,
    PriorityTier, QuickScore, RelevanceTier, ScoreBreakdown, Section, SectionMap, StuffingReport,
    Term, TermCategory, letter_grade,
};
use vitae_lexicon::{
    IndustryCatalog, KeywordCatalog, RoleCategory, SkillClass, SynonymCatalog, classify_skill,
};

/// Sub-score weights for the keyword-placement composite.
const W_DENSITY: f64 = 0.30;
const W_SECTION: f64 = 0.40;
const W_CONTEXT: f64 = 0.30;

/// Keywords carried into per-keyword detail rows.
const DETAIL_KEYWORDS: usize = 20;

/// Semantic similarity's share of the comprehensive total when a job
/// description is available.
const SEMANTIC_BLEND: f64 = 0.10;

/// Impact-metric count that saturates the metrics factor.
const METRICS_SATURATION: f64 = 15.0;

const DEGREE_WORDS: &[&str] = &[
    "bachelor", "bsc", "master", "msc", "mba", "phd", "doctorate", "associate",
];
const CERTIFICATION_WORDS: &[&str] = &["certified", "certification", "license", "licensed"];

/// The scoring engine's entry point: holds configuration and catalogs,
/// and composes the individual scorers into full analyses.
pub struct Analyzer<'a> {
    config: Bm25Config,
    config_replaced: bool,
    keywords: &'a KeywordCatalog,
    synonyms: &'a SynonymCatalog,
    industries: &'a IndustryCatalog,
    category: RoleCategory,
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer<'static> {
    /// Analyzer with built-in catalogs and default BM25 parameters.
    pub fn new() -> Self {
        Self {
            config: Bm25Config::default(),
            config_replaced: false,
            keywords: KeywordCatalog::builtin(),
            synonyms: SynonymCatalog::builtin(),
            industries: IndustryCatalog::builtin(),
            category: RoleCategory::SoftwareEngineering,
        }
    }
}

impl<'a> Analyzer<'a> {
    pub fn with_catalogs(
        keywords: &'a KeywordCatalog,
        synonyms: &'a SynonymCatalog,
        industries: &'a IndustryCatalog,
    ) -> Self {
        Self {
            config: Bm25Config::default(),
            config_replaced: false,
            keywords,
            synonyms,
            industries,
            category: RoleCategory::SoftwareEngineering,
        }
    }

    /// Out-of-range parameters fall back to defaults and raise
    /// `InvalidConfig` on results.
    pub fn with_config(mut self, config: Bm25Config) -> Self {
        let (sanitized, replaced) = config.sanitized();
        self.config = sanitized;
        self.config_replaced = replaced;
        self
    }

    pub fn with_category(mut self, category: RoleCategory) -> Self {
        self.category = category;
        self
    }

    /// Full analysis of a resume against an optional job description.
    ///
    /// Degenerate inputs (empty resume, missing JD, single-document
    /// corpus) are recovered with fallback values and surfaced as flags,
    /// never as errors.
    pub fn analyze(
        &self,
        resume: &str,
        job_description: Option<&str>,
        industry_hint: Option<Industry>,
    ) -> Analysis {
        let mut flags = Vec::new();
        if self.config_replaced {
            flags.push(AnalysisFlag::InvalidConfig);
        }

        if resume.trim().is_empty() {
            flags.push(AnalysisFlag::EmptyInput);
            return empty_analysis(industry_hint.unwrap_or(Industry::General), flags);
        }

        let jd = job_description.map(str::trim).filter(|s| !s.is_empty());
        if jd.is_none() {
            flags.push(AnalysisFlag::NoJobDescription);
            flags.push(AnalysisFlag::DegenerateCorpus);
        }

        let sections = detect_sections(resume);
        let scorer = RelevanceScorer::with_synonyms(self.config, self.synonyms);

        // Keyword set: JD-derived where possible, category-derived
        // otherwise. Curated domain keywords named by the JD come first —
        // a two-document corpus gives exactly the shared, matchable terms
        // the lowest IDF, so pure top-N ranking would crowd them out.
        let terms: Vec<Term> = if let Some(jd_text) = jd {
            let ranked = scorer.extract_keywords(
                jd_text,
                resume,
                self.category,
                self.keywords,
                crate::bm25::DEFAULT_TOP_TERMS,
            );
            let jd_lower = jd_text.to_lowercase();
            let mut terms: Vec<Term> = Vec::new();

            for kw in self.keywords.for_category(self.category) {
                if terms.len() >= DETAIL_KEYWORDS {
                    break;
                }
                let kw_lower = kw.to_lowercase();
                if jd_lower.contains(&kw_lower) && !terms.iter().any(|t| t.text == kw_lower) {
                    let priority = ranked
                        .iter()
                        .find(|r| r.term == kw_lower)
                        .map(|r| priority_from_tier(r.tier))
                        .unwrap_or(PriorityTier::NiceToHave);
                    terms.push(make_term(kw_lower, priority));
                }
            }
            for r in &ranked {
                if terms.len() >= DETAIL_KEYWORDS {
                    break;
                }
                if !terms.iter().any(|t| t.text == r.term) {
                    terms.push(make_term(r.term.clone(), priority_from_tier(r.tier)));
                }
            }
            terms
        } else {
            let category_keywords = self.keywords.for_category(self.category);
            let total = category_keywords.len().min(DETAIL_KEYWORDS);
            category_keywords
                .into_iter()
                .take(DETAIL_KEYWORDS)
                .enumerate()
                .map(|(i, kw)| make_term(kw.to_string(), priority_from_rank(i, total)))
                .collect()
        };

        let term_names: Vec<String> = terms.iter().map(|t| t.text.clone()).collect();
        let corpus: Vec<&str> = match jd {
            Some(jd_text) => vec![jd_text, resume],
            None => vec![resume],
        };

        // Per-keyword detail: relevance, density, placement, and context
        // are independent across keywords
        let details: Vec<KeywordDetail> = terms
            .par_iter()
            .map(|term| KeywordDetail {
                keyword: term.text.clone(),
                relevance: scorer.score_contextual(&term.text, resume, &corpus),
                density: keyword_density(resume, &term.text, term.priority),
                placement: score_keyword(&sections, &term.text),
                context: analyze_context(resume, &term.text),
            })
            .collect();

        let stuffing = detect_stuffing(resume, &term_names);
        let breakdown = breakdown_from(&details, &stuffing);

        let keyword_match =
            scorer.keyword_match_score(resume, jd.unwrap_or(""), self.category, self.keywords, 100.0);

        let semantic_similarity = jd.map(|jd_text| deep_similarity(resume, jd_text).similarity);

        let industry = industry_hint.unwrap_or_else(|| {
            let mut detection_input = resume.to_string();
            if let Some(jd_text) = jd {
                detection_input.push('\n');
                detection_input.push_str(jd_text);
            }
            detect_industry(&detection_input, self.industries)
        });

        let factors = self.factor_scores(resume, &sections, &details, keyword_match);
        let (mut industry_total, _) = industry_score(&factors, industry, self.industries);
        if let Some(similarity) = semantic_similarity {
            industry_total =
                industry_total * (1.0 - SEMANTIC_BLEND) + similarity * 100.0 * SEMANTIC_BLEND;
            industry_total = (industry_total * 10.0).round() / 10.0;
        }
        let industry_fit = IndustryFit::from_score(industry_total);

        tracing::debug!(
            total = breakdown.total_score,
            industry = %industry,
            industry_total,
            "analysis complete"
        );

        Analysis {
            breakdown,
            keywords: details,
            stuffing,
            industry,
            industry_score: industry_total,
            industry_fit,
            factors,
            semantic_similarity,
            flags,
        }
    }

    /// Lightweight estimate: keyword match, surface format, and content
    /// completeness blended into one graded score.
    pub fn quick_score(&self, resume: &str, job_description: Option<&str>) -> QuickScore {
        let mut flags = Vec::new();
        if self.config_replaced {
            flags.push(AnalysisFlag::InvalidConfig);
        }

        if resume.trim().is_empty() {
            flags.push(AnalysisFlag::EmptyInput);
            return QuickScore {
                score: 0.0,
                keyword_score: 0.0,
                format_score: 0.0,
                completeness_score: 0.0,
                grade: letter_grade(0.0),
                flags,
            };
        }

        let jd = job_description.map(str::trim).filter(|s| !s.is_empty());
        if jd.is_none() {
            flags.push(AnalysisFlag::NoJobDescription);
        }

        let scorer = RelevanceScorer::with_synonyms(self.config, self.synonyms);
        let keyword_score =
            scorer.keyword_match_score(resume, jd.unwrap_or(""), self.category, self.keywords, 100.0);
        let format = format_score(resume);
        let completeness = completeness_score(resume);

        let score = (keyword_score * 0.4 + format * 0.3 + completeness * 0.3).round();

        QuickScore {
            score,
            keyword_score,
            format_score: format,
            completeness_score: completeness,
            grade: letter_grade(score),
            flags,
        }
    }

    /// Raw 0-100 factor scores feeding the industry weight vector.
    fn factor_scores(
        &self,
        resume: &str,
        sections: &SectionMap,
        details: &[KeywordDetail],
        keyword_match: f64,
    ) -> FactorScores {
        let metrics =
            ((count_impact_metrics(resume) as f64 / METRICS_SATURATION) * 100.0).min(100.0);

        let verb_count: usize = vitae_lexicon::ACTION_VERBS
            .iter()
            .map(|verb| TermMatcher::new(verb).count(resume))
            .sum();
        let action_verbs = match verb_count {
            12.. => 100.0,
            8..=11 => 80.0,
            5..=7 => 60.0,
            2..=4 => 40.0,
            1 => 20.0,
            0 => 0.0,
        };

        let certifications = presence_factor(
            sections.text(Section::Certifications),
            resume,
            CERTIFICATION_WORDS,
        );
        let education = presence_factor(sections.text(Section::Education), resume, DEGREE_WORDS);

        let experience_text = sections.text(Section::Experience);
        let experience = if experience_text.trim().is_empty() {
            0.0
        } else {
            40.0 + (whitespace_word_count(experience_text) as f64 / 10.0).min(60.0)
        };

        let technical_skills = class_coverage(details, &[SkillClass::Hard, SkillClass::Technical]);
        let soft_skills = class_coverage(details, &[SkillClass::Soft]);

        FactorScores {
            keywords: keyword_match,
            metrics,
            certifications,
            education,
            experience,
            technical_skills,
            soft_skills,
            action_verbs,
            formatting: format_score(resume),
        }
    }
}

/// Section presence plus supporting-keyword hits, capped at 100.
fn presence_factor(section_text: &str, resume: &str, words: &[&str]) -> f64 {
    let mut score = if section_text.trim().is_empty() { 0.0 } else { 40.0 };
    let hits = words
        .iter()
        .filter(|w| TermMatcher::new(w).is_match(resume))
        .count();
    score += hits as f64 * 20.0;
    score.min(100.0)
}

/// Fraction of the analyzed keywords in the given classes that actually
/// appear in the resume. Neutral 50 when no keyword falls in the classes.
fn class_coverage(details: &[KeywordDetail], classes: &[SkillClass]) -> f64 {
    let in_class: Vec<&KeywordDetail> = details
        .iter()
        .filter(|d| classes.contains(&classify_skill(&d.keyword)))
        .collect();
    if in_class.is_empty() {
        return 50.0;
    }
    let found = in_class.iter().filter(|d| d.density.count > 0).count();
    (found as f64 / in_class.len() as f64) * 100.0
}

fn breakdown_from(details: &[KeywordDetail], stuffing: &StuffingReport) -> ScoreBreakdown {
    if details.is_empty() {
        return ScoreBreakdown {
            total_score: 0.0,
            density_score: 0.0,
            section_score: 0.0,
            context_score: 0.0,
            stuffing_penalty: stuffing.penalty,
        };
    }

    let n = details.len() as f64;
    let density = details.iter().map(|d| d.density.density_score).sum::<f64>() / n;
    let section = details
        .iter()
        .map(|d| d.placement.total_weighted_score)
        .sum::<f64>()
        / n;
    let context = details.iter().map(|d| d.context.context_score).sum::<f64>() / n;

    let base = density * W_DENSITY + section * W_SECTION + context * W_CONTEXT;
    let total = (base - stuffing.penalty).clamp(0.0, 100.0);

    ScoreBreakdown {
        total_score: total.round(),
        density_score: density.round(),
        section_score: section.round(),
        context_score: context.round(),
        stuffing_penalty: stuffing.penalty,
    }
}

fn empty_analysis(industry: Industry, flags: Vec<AnalysisFlag>) -> Analysis {
    Analysis {
        breakdown: ScoreBreakdown {
            total_score: 0.0,
            density_score: 0.0,
            section_score: 0.0,
            context_score: 0.0,
            stuffing_penalty: 0.0,
        },
        keywords: Vec::new(),
        stuffing: StuffingReport {
            is_stuffing: false,
            stuffed_keywords: Vec::new(),
            penalty: 0.0,
        },
        industry,
        industry_score: 0.0,
        industry_fit: IndustryFit::Poor,
        factors: FactorScores::default(),
        semantic_similarity: None,
        flags,
    }
}

fn make_term(text: String, priority: PriorityTier) -> Term {
    let category = match classify_skill(&text) {
        SkillClass::Hard => TermCategory::Tool,
        SkillClass::Soft => TermCategory::Soft,
        SkillClass::Technical => TermCategory::Technical,
        SkillClass::IndustrySpecific => TermCategory::Industry,
    };
    Term {
        text,
        category,
        priority,
    }
}

fn priority_from_tier(tier: RelevanceTier) -> PriorityTier {
    match tier {
        RelevanceTier::Critical => PriorityTier::Critical,
        RelevanceTier::Important => PriorityTier::Important,
        RelevanceTier::Moderate | RelevanceTier::Low => PriorityTier::NiceToHave,
    }
}

/// Category fallback tiering: top quarter critical, next 35% important.
fn priority_from_rank(index: usize, total: usize) -> PriorityTier {
    let tier1 = total.div_ceil(4);
    let tier2 = tier1 + (total * 35).div_ceil(100);
    if index < tier1 {
        PriorityTier::Critical
    } else if index < tier2 {
        PriorityTier::Important
    } else {
        PriorityTier::NiceToHave
    }
}
