use crate::pattern::{TermMatcher, escape};
use crate::terms::extract_candidates;
use crate::text::{leading_cutoff, whitespace_word_count};
use rayon::prelude::*;
use regex::Regex;
use vitae_core::{Bm25Config, RelevanceResult, RelevanceTier};
use vitae_lexicon::{
    ACTION_VERBS, EXPERIENCE_TERMS, KeywordCatalog, METRIC_PATTERNS, PROFICIENCY_TERMS,
    RoleCategory, SynonymCatalog,
};

/// Synonym matches count at 80% of an exact match.
const SYNONYM_WEIGHT: f64 = 0.8;
/// Default number of top JD terms used for keyword matching.
pub const DEFAULT_TOP_TERMS: usize = 50;
/// Category keywords sampled when no job description is available.
const CATEGORY_SAMPLE: usize = 100;
/// k1 used for category matching (slightly lower saturation point).
const CATEGORY_K1: f64 = 1.2;

/// Contextual multipliers for resume-specific scoring.
const EARLY_DOCUMENT_FRACTION: f64 = 0.3;
const EARLY_MULTIPLIER: f64 = 1.25;
const ACTION_CONTEXT_MULTIPLIER: f64 = 1.3;
const PROFICIENCY_MULTIPLIER: f64 = 1.2;
const METRIC_MULTIPLIER: f64 = 1.15;
/// Metric patterns must appear within this many bytes of the term.
const METRIC_WINDOW: usize = 100;

/// BM25 relevance scorer over a small reference corpus.
///
/// The corpus is typically `[job description, resume]`; a single-document
/// corpus falls back to the document's own length for `avgdl` instead of
/// dividing by zero.
pub struct RelevanceScorer<'a> {
    config: Bm25Config,
    synonyms: &'a SynonymCatalog,
}

impl RelevanceScorer<'static> {
    pub fn new(config: Bm25Config) -> Self {
        Self {
            config,
            synonyms: SynonymCatalog::builtin(),
        }
    }
}

impl<'a> RelevanceScorer<'a> {
    pub fn with_synonyms(config: Bm25Config, synonyms: &'a SynonymCatalog) -> Self {
        Self { config, synonyms }
    }

    /// Weighted term frequency: exact word-boundary matches plus 0.8× any
    /// synonym matches.
    fn term_frequency(&self, term: &str, document: &str) -> f64 {
        let mut tf = TermMatcher::new(term).count(document) as f64;
        for synonym in self.synonyms.synonyms(term) {
            tf += TermMatcher::new(synonym).count(document) as f64 * SYNONYM_WEIGHT;
        }
        tf
    }

    /// Base BM25 score for a term against a document.
    ///
    /// `tf == 0` short-circuits to 0 regardless of IDF.
    pub fn score(&self, term: &str, document: &str, corpus: &[&str]) -> f64 {
        self.score_with_k1(term, document, corpus, self.config.k1)
    }

    fn score_with_k1(&self, term: &str, document: &str, corpus: &[&str], k1: f64) -> f64 {
        let term_lower = term.to_lowercase();
        let tf = self.term_frequency(&term_lower, document);
        if tf == 0.0 {
            return 0.0;
        }

        let doc_len = whitespace_word_count(document) as f64;
        let avgdl = if corpus.len() <= 1 {
            doc_len.max(1.0)
        } else {
            corpus
                .iter()
                .map(|d| whitespace_word_count(d) as f64)
                .sum::<f64>()
                / corpus.len() as f64
        };

        let matcher = TermMatcher::new(&term_lower);
        let df = corpus.iter().filter(|d| matcher.is_match(d)).count() as f64;
        let n = corpus.len().max(1) as f64;

        let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();

        let b = self.config.b;
        let numerator = tf * (k1 + 1.0);
        let denominator = tf + k1 * (1.0 - b + b * (doc_len / avgdl.max(1.0)));

        idf * (numerator / denominator)
    }

    /// Contextual BM25: the base score with resume-specific multipliers
    /// for early placement, action-verb context, proficiency language, and
    /// nearby quantified metrics.
    pub fn score_contextual(&self, term: &str, document: &str, corpus: &[&str]) -> RelevanceResult {
        self.contextual_with_k1(term, document, corpus, self.config.k1)
    }

    fn contextual_with_k1(
        &self,
        term: &str,
        document: &str,
        corpus: &[&str],
        k1: f64,
    ) -> RelevanceResult {
        let base = self.score_with_k1(term, document, corpus, k1);
        let term_lower = term.to_lowercase();
        let doc_lower = document.to_lowercase();
        let matcher = TermMatcher::new(&term_lower);
        let frequency = matcher.count(&doc_lower);

        let mut multiplier = 1.0;
        if base > 0.0 {
            let cutoff = leading_cutoff(&doc_lower, EARLY_DOCUMENT_FRACTION);
            if doc_lower[..cutoff].contains(&term_lower) {
                multiplier *= EARLY_MULTIPLIER;
            }
            if has_action_context(&term_lower, &doc_lower) {
                multiplier *= ACTION_CONTEXT_MULTIPLIER;
            }
            if has_proficiency_context(&term_lower, &doc_lower) {
                multiplier *= PROFICIENCY_MULTIPLIER;
            }
            if has_nearby_metric(&matcher, &doc_lower) {
                multiplier *= METRIC_MULTIPLIER;
            }
        }

        let score = base * multiplier;
        let document_frequency = corpus.iter().filter(|d| matcher.is_match(d)).count();

        RelevanceResult {
            term: term.to_string(),
            score,
            frequency,
            document_frequency,
            tier: RelevanceTier::from_score(score),
        }
    }

    /// Extract and rank the top terms of a job description by contextual
    /// BM25 against the JD itself, with `[jd, resume]` as the corpus.
    ///
    /// Curated category keywords named by the JD are guaranteed a slot:
    /// with a two-document corpus, terms shared by both documents get the
    /// lowest IDF, and the shared terms are exactly the ones keyword
    /// matching is about.
    pub fn extract_keywords(
        &self,
        job_description: &str,
        resume: &str,
        category: RoleCategory,
        catalog: &KeywordCatalog,
        top_n: usize,
    ) -> Vec<RelevanceResult> {
        if job_description.trim().is_empty() {
            return Vec::new();
        }

        let candidates = extract_candidates(job_description, category, catalog);
        let corpus = [job_description, resume];

        let scored: Vec<RelevanceResult> = candidates
            .par_iter()
            .map(|term| self.score_contextual(term, job_description, &corpus))
            .filter(|r| r.score > 0.0)
            .collect();

        let jd_lower = job_description.to_lowercase();
        let curated: Vec<String> = catalog
            .for_category(category)
            .into_iter()
            .map(str::to_lowercase)
            .filter(|kw| jd_lower.contains(kw))
            .collect();

        let (mut results, rest): (Vec<RelevanceResult>, Vec<RelevanceResult>) = scored
            .into_iter()
            .partition(|r| curated.contains(&r.term));

        let mut rest = rest;
        rest.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.extend(rest.into_iter().take(top_n.saturating_sub(results.len().min(top_n))));

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(top_n);
        tracing::debug!(candidates = results.len(), "ranked job description terms");
        results
    }

    /// Overall keyword-match percentage of a resume against a job
    /// description, on a 0..=max_score scale.
    ///
    /// Each top JD term contributes `importance = jd_score/10` weighted by
    /// `match_quality = min(1, resume_score/jd_score)`.
    pub fn keyword_match_score(
        &self,
        resume: &str,
        job_description: &str,
        category: RoleCategory,
        catalog: &KeywordCatalog,
        max_score: f64,
    ) -> f64 {
        if job_description.trim().is_empty() {
            return self.category_score(resume, category, catalog, max_score);
        }

        let top_terms =
            self.extract_keywords(job_description, resume, category, catalog, DEFAULT_TOP_TERMS);
        let corpus = [job_description, resume];

        let mut total = 0.0;
        let mut max_possible = 0.0;

        for keyword in &top_terms {
            let resume_result = self.score_contextual(&keyword.term, resume, &corpus);
            let importance = keyword.score / 10.0;
            max_possible += importance;

            if resume_result.score > 0.0 {
                let quality = (resume_result.score / keyword.score).min(1.0);
                total += importance * quality;
            }
        }

        if max_possible == 0.0 {
            return 0.0;
        }

        let normalized = (total / max_possible) * max_score;
        round1(normalized.clamp(0.0, max_score))
    }

    /// Category-based fallback when no job description is available:
    /// coverage of the top category keywords blended with average match
    /// quality, using a slightly lower k1.
    pub fn category_score(
        &self,
        resume: &str,
        category: RoleCategory,
        catalog: &KeywordCatalog,
        max_score: f64,
    ) -> f64 {
        let keywords: Vec<&str> = catalog
            .for_category(category)
            .into_iter()
            .take(CATEGORY_SAMPLE)
            .collect();
        if keywords.is_empty() {
            return 0.0;
        }

        let corpus = [resume];
        let scored: Vec<f64> = keywords
            .par_iter()
            .map(|kw| self.contextual_with_k1(kw, resume, &corpus, CATEGORY_K1).score)
            .filter(|s| *s > 0.0)
            .collect();

        let found = scored.len();
        let total: f64 = scored.iter().sum();

        let coverage = found as f64 / keywords.len() as f64;
        let avg_quality = total / found.max(1) as f64;
        let normalized = (coverage * 0.6 + (avg_quality / 5.0).min(1.0) * 0.4) * max_score;

        round1(normalized.min(max_score))
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Action-verb or experience-noun co-occurrence on the same line as the
/// term ('.' does not cross newlines).
fn has_action_context(term_lower: &str, doc_lower: &str) -> bool {
    let verbs = ACTION_VERBS.join("|");
    let nouns = EXPERIENCE_TERMS.join("|");
    let escaped = escape(term_lower);
    let patterns = [
        format!(r"({verbs}).*{escaped}"),
        format!(r"{escaped}.*({nouns})"),
    ];
    patterns
        .iter()
        .any(|p| Regex::new(p).map(|re| re.is_match(doc_lower)).unwrap_or(false))
}

/// Proficiency language co-occurring with the term.
fn has_proficiency_context(term_lower: &str, doc_lower: &str) -> bool {
    let terms = PROFICIENCY_TERMS.join("|");
    let escaped = escape(term_lower);
    let pattern = format!(r"({terms}).*{escaped}|{escaped}.*({terms})");
    Regex::new(&pattern)
        .map(|re| re.is_match(doc_lower))
        .unwrap_or(false)
}

/// A quantified metric within ±METRIC_WINDOW bytes of the first occurrence.
fn has_nearby_metric(matcher: &TermMatcher, doc_lower: &str) -> bool {
    let Some(offset) = matcher.first_offset(doc_lower) else {
        return false;
    };
    let mut start = offset.saturating_sub(METRIC_WINDOW);
    while start > 0 && !doc_lower.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (offset + METRIC_WINDOW).min(doc_lower.len());
    while end < doc_lower.len() && !doc_lower.is_char_boundary(end) {
        end += 1;
    }
    let window = &doc_lower[start..end];
    METRIC_PATTERNS.iter().any(|p| p.is_match(window))
}
