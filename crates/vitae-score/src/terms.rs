use crate::text::word_tokens;
use std::collections::BTreeSet;
use vitae_lexicon::{KeywordCatalog, RoleCategory, is_stop_word};

/// Minimum lengths for candidate n-grams.
const MIN_WORD_LEN: usize = 3;
const MIN_BIGRAM_LEN: usize = 6;
const MIN_TRIGRAM_LEN: usize = 10;

/// Extract candidate terms from a job description: unigrams, bigrams, and
/// trigrams by sliding window, plus curated category keywords that appear
/// verbatim in the text.
///
/// The output is a deduplicated, order-independent set; relevance ranking
/// happens downstream.
pub fn extract_candidates(
    job_description: &str,
    category: RoleCategory,
    catalog: &KeywordCatalog,
) -> Vec<String> {
    let jd_lower = job_description.to_lowercase();
    let words = word_tokens(&jd_lower);

    // BTreeSet gives deterministic candidate order for a given input
    let mut candidates: BTreeSet<String> = BTreeSet::new();

    for word in &words {
        if word.len() >= MIN_WORD_LEN && !is_stop_word(word) {
            candidates.insert(word.clone());
        }
    }

    for pair in words.windows(2) {
        let (w1, w2) = (&pair[0], &pair[1]);
        if w1.len() >= MIN_WORD_LEN
            && w2.len() >= MIN_WORD_LEN
            && (!is_stop_word(w1) || !is_stop_word(w2))
        {
            let bigram = format!("{w1} {w2}");
            if bigram.len() >= MIN_BIGRAM_LEN {
                candidates.insert(bigram);
            }
        }
    }

    for triple in words.windows(3) {
        let (w1, w3) = (&triple[0], &triple[2]);
        if w1.len() >= MIN_WORD_LEN
            && w3.len() >= MIN_WORD_LEN
            && !is_stop_word(w1)
            && !is_stop_word(w3)
        {
            let trigram = format!("{w1} {} {w3}", triple[1]);
            if trigram.len() >= MIN_TRIGRAM_LEN {
                candidates.insert(trigram);
            }
        }
    }

    for keyword in catalog.for_category(category) {
        if jd_lower.contains(&keyword.to_lowercase()) {
            candidates.insert(keyword.to_lowercase());
        }
    }

    candidates.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(jd: &str) -> Vec<String> {
        extract_candidates(jd, RoleCategory::SoftwareEngineering, KeywordCatalog::builtin())
    }

    #[test]
    fn unigrams_skip_stop_and_short_words() {
        let candidates = extract("we use python for the backend");
        assert!(candidates.contains(&"python".to_string()));
        assert!(candidates.contains(&"backend".to_string()));
        assert!(!candidates.contains(&"the".to_string()));
        assert!(!candidates.contains(&"we".to_string()));
    }

    #[test]
    fn bigrams_and_trigrams_emitted() {
        let candidates = extract("distributed systems engineering experience");
        assert!(candidates.contains(&"distributed systems".to_string()));
        assert!(candidates.contains(&"distributed systems engineering".to_string()));
    }

    #[test]
    fn category_keywords_require_literal_presence() {
        let with = extract("kubernetes experience required");
        assert!(with.contains(&"kubernetes".to_string()));

        let without = extract("gardening experience required");
        assert!(!without.contains(&"kubernetes".to_string()));
    }

    #[test]
    fn multiword_category_keywords_survive_tokenization() {
        // "machine learning" only exists as a catalog keyword and a bigram
        let candidates = extract("machine learning models in production");
        assert!(candidates.contains(&"machine learning".to_string()));
    }

    #[test]
    fn output_is_deduplicated() {
        let candidates = extract("python python python");
        let count = candidates.iter().filter(|c| *c == "python").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn empty_jd_yields_nothing() {
        assert!(extract("").is_empty());
    }
}
