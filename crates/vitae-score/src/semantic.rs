use crate::embedding::{EmbeddingProvider, HashEmbedder, cosine_similarity};
use rayon::prelude::*;
use vitae_core::{ContextualMatch, DeepSimilarityScore, MatchImportance};

/// Hard cap on sentences per document; pairwise comparison is quadratic.
const MAX_SENTENCES: usize = 200;
/// Fragments shorter than this are noise.
const MIN_SENTENCE_LEN: usize = 10;
/// Single-link cluster threshold.
const CLUSTER_THRESHOLD: f64 = 0.7;
/// Contextual matches reported.
const TOP_MATCHES: usize = 10;
/// Clusters / key phrases kept in the final result.
const MAX_CLUSTERS: usize = 8;
const MAX_KEY_PHRASES: usize = 8;
/// Sentence keywords: words longer than this, first five.
const KEYWORD_MIN_LEN: usize = 5;
const KEYWORDS_PER_SENTENCE: usize = 5;

/// A sentence with its embedding and importance weight.
pub struct EncodedSentence {
    pub text: String,
    pub embedding: Vec<f64>,
    pub importance: f64,
    pub keywords: Vec<String>,
}

/// Split text into scoring sentences: `[.!?]` boundaries, trimmed,
/// short fragments dropped, count capped.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.len() > MIN_SENTENCE_LEN)
        .take(MAX_SENTENCES)
        .map(str::to_string)
        .collect()
}

/// Encode every sentence of a document, using the other sentences as
/// embedding context.
pub fn encode_document(text: &str, provider: &dyn EmbeddingProvider) -> Vec<EncodedSentence> {
    let sentences = split_sentences(text);

    sentences
        .par_iter()
        .enumerate()
        .map(|(i, sentence)| {
            let context: Vec<String> = sentences
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, s)| s.clone())
                .collect();

            let embedding = provider.embed(sentence, &context);

            // First sentences carry more weight; longer sentences carry
            // more information
            let position_weight = if i == 0 {
                1.2
            } else if i < 3 {
                1.1
            } else {
                1.0
            };
            let word_count = sentence.split_whitespace().count() as f64;
            let length_weight = (word_count / 20.0).min(1.0);
            let importance = ((position_weight + length_weight) / 2.0).min(1.0);

            let keywords = sentence
                .to_lowercase()
                .split_whitespace()
                .filter(|w| w.len() >= KEYWORD_MIN_LEN)
                .take(KEYWORDS_PER_SENTENCE)
                .map(str::to_string)
                .collect();

            EncodedSentence {
                text: sentence.clone(),
                embedding,
                importance,
                keywords,
            }
        })
        .collect()
}

/// Importance-weighted mean similarity over all sentence pairs.
fn document_similarity(resume: &[EncodedSentence], job: &[EncodedSentence]) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for r in resume {
        for j in job {
            let similarity = cosine_similarity(&r.embedding, &j.embedding);
            let weight = (r.importance + j.importance) / 2.0;
            total += similarity * weight;
            count += 1;
        }
    }
    if count == 0 { 0.0 } else { total / count as f64 }
}

/// Top sentence pairs ranked by importance-weighted similarity.
fn contextual_matches(
    resume: &[EncodedSentence],
    job: &[EncodedSentence],
) -> Vec<ContextualMatch> {
    let mut ranked: Vec<(f64, ContextualMatch)> = Vec::new();
    for r in resume {
        for j in job {
            let similarity = cosine_similarity(&r.embedding, &j.embedding);
            let combined = (r.importance + j.importance) / 2.0;
            let weighted = similarity * combined;
            ranked.push((
                weighted,
                ContextualMatch {
                    resume_phrase: r.text.clone(),
                    job_phrase: j.text.clone(),
                    similarity: (similarity * 1000.0).round() / 1000.0,
                    importance: MatchImportance::from_weighted(weighted),
                },
            ));
        }
    }

    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    ranked.into_iter().take(TOP_MATCHES).map(|(_, m)| m).collect()
}

/// Single-link clusters over the combined sentence set, labeled by their
/// most frequent keywords.
fn semantic_clusters(sentences: &[EncodedSentence]) -> Vec<String> {
    let mut clusters: Vec<String> = Vec::new();
    let mut processed = vec![false; sentences.len()];

    for i in 0..sentences.len() {
        if processed[i] {
            continue;
        }
        processed[i] = true;
        let mut members = vec![i];

        for j in (i + 1)..sentences.len() {
            if processed[j] {
                continue;
            }
            let similarity = cosine_similarity(&sentences[i].embedding, &sentences[j].embedding);
            if similarity >= CLUSTER_THRESHOLD {
                members.push(j);
                processed[j] = true;
            }
        }

        // Label: top 3 keywords by frequency, first-seen order breaking ties
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for &m in &members {
            for kw in &sentences[m].keywords {
                match counts.iter_mut().find(|(k, _)| *k == kw.as_str()) {
                    Some((_, c)) => *c += 1,
                    None => counts.push((kw, 1)),
                }
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let label: Vec<&str> = counts.iter().take(3).map(|(k, _)| *k).collect();
        if !label.is_empty() {
            clusters.push(label.join(" + "));
        }
    }

    clusters
}

/// Three-word windows over the most important sentences, kept when they
/// contain one of the sentence's keywords.
fn key_phrases(sentences: &[EncodedSentence], top_n: usize) -> Vec<String> {
    let mut by_importance: Vec<&EncodedSentence> = sentences.iter().collect();
    by_importance.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut phrases: Vec<String> = Vec::new();
    for sentence in by_importance.iter().take(top_n) {
        let words: Vec<&str> = sentence.text.split_whitespace().collect();
        for i in 0..words.len().saturating_sub(1) {
            let end = (i + 3).min(words.len());
            let phrase = words[i..end].join(" ");
            let phrase_lower = phrase.to_lowercase();
            if sentence.keywords.iter().any(|kw| phrase_lower.contains(kw))
                && !phrases.contains(&phrase)
            {
                phrases.push(phrase);
            }
        }
    }

    phrases.truncate(top_n);
    phrases
}

/// Full semantic-similarity report with the default deterministic embedder.
pub fn deep_similarity(resume_text: &str, job_text: &str) -> DeepSimilarityScore {
    deep_similarity_with(resume_text, job_text, &HashEmbedder)
}

/// Full semantic-similarity report with a caller-supplied embedder.
pub fn deep_similarity_with(
    resume_text: &str,
    job_text: &str,
    provider: &dyn EmbeddingProvider,
) -> DeepSimilarityScore {
    let resume_sentences = encode_document(resume_text, provider);
    let job_sentences = encode_document(job_text, provider);
    tracing::debug!(
        resume_sentences = resume_sentences.len(),
        job_sentences = job_sentences.len(),
        "encoded documents"
    );

    let similarity = document_similarity(&resume_sentences, &job_sentences);
    let matches = contextual_matches(&resume_sentences, &job_sentences);

    let mut phrases = key_phrases(&resume_sentences, TOP_MATCHES);
    phrases.truncate(MAX_KEY_PHRASES);

    let combined: Vec<EncodedSentence> = resume_sentences
        .into_iter()
        .chain(job_sentences)
        .collect();
    let mut clusters = semantic_clusters(&combined);
    clusters.truncate(MAX_CLUSTERS);

    let critical = matches
        .iter()
        .filter(|m| m.importance == MatchImportance::Critical)
        .count() as f64;
    let high = matches
        .iter()
        .filter(|m| m.importance == MatchImportance::High)
        .count() as f64;
    let confidence = (50.0 + critical * 10.0 + high * 5.0).min(100.0);

    DeepSimilarityScore {
        similarity: (similarity * 1000.0).round() / 1000.0,
        confidence,
        semantic_clusters: clusters,
        key_phrases: phrases,
        contextual_matches: matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Built distributed rust services handling millions of requests. \
        Led the platform team through a cloud migration. Optimized query latency by 60%.";
    const JOB: &str = "Looking for an engineer to build distributed services in rust. \
        Experience with cloud migrations preferred. Latency optimization is a plus.";

    #[test]
    fn sentences_split_and_filter() {
        let sentences = split_sentences("Short. This sentence is long enough to keep! Tiny?");
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].contains("long enough"));
    }

    #[test]
    fn sentence_count_is_capped() {
        let text = "this is a sentence with words. ".repeat(500);
        assert_eq!(split_sentences(&text).len(), MAX_SENTENCES);
    }

    #[test]
    fn first_sentence_is_most_important() {
        let encoded = encode_document(RESUME, &HashEmbedder);
        assert_eq!(encoded.len(), 3);
        assert!(encoded[0].importance >= encoded[2].importance);
        for s in &encoded {
            assert!(s.importance <= 1.0);
        }
    }

    #[test]
    fn identical_documents_pair_up_exactly() {
        let result = deep_similarity(RESUME, RESUME);
        // Every sentence has an identical twin; the top-ranked match is
        // a diagonal pair at cosine 1
        let top = &result.contextual_matches[0];
        assert_eq!(top.resume_phrase, top.job_phrase);
        assert!(top.similarity >= 0.999);
        assert!(result.similarity > 0.0);
    }

    #[test]
    fn similarity_is_bounded_and_deterministic() {
        let a = deep_similarity(RESUME, JOB);
        let b = deep_similarity(RESUME, JOB);
        assert!((0.0..=1.0).contains(&a.similarity));
        assert_eq!(a.similarity, b.similarity);
        assert_eq!(a.contextual_matches.len(), b.contextual_matches.len());
    }

    #[test]
    fn matches_are_bounded_and_ranked() {
        let result = deep_similarity(RESUME, JOB);
        assert!(result.contextual_matches.len() <= TOP_MATCHES);
        assert!(!result.contextual_matches.is_empty());
    }

    #[test]
    fn confidence_in_range() {
        let result = deep_similarity(RESUME, JOB);
        assert!(result.confidence >= 50.0);
        assert!(result.confidence <= 100.0);
    }

    #[test]
    fn clusters_and_phrases_bounded() {
        let result = deep_similarity(RESUME, JOB);
        assert!(result.semantic_clusters.len() <= MAX_CLUSTERS);
        assert!(result.key_phrases.len() <= MAX_KEY_PHRASES);
    }

    #[test]
    fn empty_inputs_yield_zero_similarity() {
        let result = deep_similarity("", "");
        assert_eq!(result.similarity, 0.0);
        assert!(result.contextual_matches.is_empty());
    }
}
