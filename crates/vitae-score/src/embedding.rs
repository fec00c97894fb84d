//! Deterministic sentence embeddings.
//!
//! `EmbeddingProvider` is the seam for swapping in a real model service;
//! the default `HashEmbedder` is a fast, deterministic stand-in that
//! scatters vocabulary indices with light positional weighting. It is a
//! specified behavior, not an approximation of any trained model.

/// Embedding width (BERT-base convention).
pub const EMBEDDING_DIM: usize = 768;

/// Each word contributes to this many dimensions.
const DIMS_PER_WORD: usize = 5;

/// Words shorter than this carry no signal.
const MIN_WORD_LEN: usize = 3;

/// Produces fixed-width sentence embeddings.
pub trait EmbeddingProvider: Sync {
    /// Embed a sentence given the rest of its document as context.
    /// The result must be L2-normalized (or all-zero for empty input).
    fn embed(&self, sentence: &str, context: &[String]) -> Vec<f64>;
}

/// Deterministic hash/positional encoder.
pub struct HashEmbedder;

impl EmbeddingProvider for HashEmbedder {
    fn embed(&self, sentence: &str, context: &[String]) -> Vec<f64> {
        let mut embedding = vec![0.0f64; EMBEDDING_DIM];

        let words: Vec<String> = sentence
            .to_lowercase()
            .split_whitespace()
            .filter(|w| w.len() >= MIN_WORD_LEN)
            .map(str::to_string)
            .collect();
        if words.is_empty() {
            return embedding;
        }

        let context_words: Vec<String> = context
            .iter()
            .flat_map(|c| c.to_lowercase().split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .collect();

        // Joint vocabulary in first-seen order
        let mut vocab: Vec<&str> = Vec::new();
        for word in words.iter().chain(context_words.iter()) {
            if !vocab.contains(&word.as_str()) {
                vocab.push(word);
            }
        }

        for (i, word) in words.iter().enumerate() {
            let Some(vocab_index) = vocab.iter().position(|v| *v == word.as_str()) else {
                continue;
            };

            // Positional encoding, transformer style
            let position = i as f64 / words.len() as f64;
            let pos_encoding = (position * std::f64::consts::PI).sin();

            // Context-frequency weighting
            let context_weight = if context_words.is_empty() {
                1.0
            } else {
                let freq = context_words.iter().filter(|w| *w == word).count() as f64;
                1.0 + (freq / context_words.len() as f64) * 0.5
            };

            let base = (vocab_index as f64 / vocab.len() as f64) * context_weight;
            for d in 0..DIMS_PER_WORD {
                let dim = (vocab_index * DIMS_PER_WORD + d) % EMBEDDING_DIM;
                embedding[dim] += base * (1.0 + pos_encoding * 0.2);
            }
        }

        normalize(&mut embedding);
        embedding
    }
}

fn normalize(embedding: &mut [f64]) {
    let magnitude = embedding.iter().map(|v| v * v).sum::<f64>().sqrt();
    if magnitude > 0.0 {
        for value in embedding.iter_mut() {
            *value /= magnitude;
        }
    }
}

/// Cosine similarity between two equal-width embeddings.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    let mag_a = mag_a.sqrt();
    let mag_b = mag_b.sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeddings_are_deterministic() {
        let e1 = HashEmbedder.embed("built scalable rust services", &[]);
        let e2 = HashEmbedder.embed("built scalable rust services", &[]);
        assert_eq!(e1, e2);
    }

    #[test]
    fn embeddings_are_unit_vectors() {
        let e = HashEmbedder.embed("built scalable rust services", &[]);
        let magnitude: f64 = e.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((magnitude - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_sentence_is_zero_vector() {
        let e = HashEmbedder.embed("", &[]);
        assert_eq!(e.len(), EMBEDDING_DIM);
        assert!(e.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn identical_sentences_have_similarity_one() {
        let e1 = HashEmbedder.embed("deployed kubernetes clusters", &[]);
        let e2 = HashEmbedder.embed("deployed kubernetes clusters", &[]);
        assert!((cosine_similarity(&e1, &e2) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn shared_vocabulary_raises_similarity() {
        let context = vec!["shared engineering context".to_string()];
        let a = HashEmbedder.embed("rust services in production", &context);
        let b = HashEmbedder.embed("rust services in production today", &context);
        let c = HashEmbedder.embed("watercolor painting techniques", &context);
        assert!(cosine_similarity(&a, &b) > cosine_similarity(&a, &c));
    }

    #[test]
    fn cosine_of_zero_vector_is_zero() {
        let zero = vec![0.0; EMBEDDING_DIM];
        let e = HashEmbedder.embed("some words here", &[]);
        assert_eq!(cosine_similarity(&zero, &e), 0.0);
    }

    #[test]
    fn single_sentence_document_does_not_produce_nan() {
        // No context sentences at all — the degenerate case
        let e = HashEmbedder.embed("only sentence in the document", &[]);
        assert!(e.iter().all(|v| v.is_finite()));
    }
}
