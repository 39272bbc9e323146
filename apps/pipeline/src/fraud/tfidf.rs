//! Term-frequency / inverse-document-frequency vectors over a small corpus,
//! with cosine similarity between fitted documents.
//!
//! Tokens are runs of at least two word characters with English stop words
//! dropped; idf uses the smoothed form `ln((1+n)/(1+df)) + 1`; vectors are
//! L2-normalized at fit time, so cosine similarity reduces to a sparse dot
//! product.

use std::collections::{HashMap, HashSet};

use crate::fraud::stopwords::ENGLISH_STOP_WORDS;

/// A corpus fitted in one pass. Document order follows the input slice.
pub struct TfidfCorpus {
    vectors: Vec<HashMap<String, f64>>,
}

impl TfidfCorpus {
    pub fn fit(documents: &[String]) -> Self {
        let stop_words: HashSet<&str> = ENGLISH_STOP_WORDS.iter().copied().collect();
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|document| tokenize(document, &stop_words))
            .collect();
        let doc_count = tokenized.len() as f64;

        let mut document_frequency: HashMap<&str, f64> = HashMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0.0) += 1.0;
            }
        }

        let mut vectors = Vec::with_capacity(tokenized.len());
        for tokens in &tokenized {
            let mut term_frequency: HashMap<&str, f64> = HashMap::new();
            for token in tokens {
                *term_frequency.entry(token.as_str()).or_insert(0.0) += 1.0;
            }

            let mut vector: HashMap<String, f64> = HashMap::with_capacity(term_frequency.len());
            for (term, count) in term_frequency {
                let idf = ((1.0 + doc_count) / (1.0 + document_frequency[term])).ln() + 1.0;
                vector.insert(term.to_string(), count * idf);
            }
            l2_normalize(&mut vector);
            vectors.push(vector);
        }

        Self { vectors }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Cosine similarity between two fitted documents, in [0, 1].
    /// A document with no usable terms has a zero vector and similarity 0.
    pub fn cosine_similarity(&self, a: usize, b: usize) -> f64 {
        let (shorter, longer) = if self.vectors[a].len() <= self.vectors[b].len() {
            (&self.vectors[a], &self.vectors[b])
        } else {
            (&self.vectors[b], &self.vectors[a])
        };
        shorter
            .iter()
            .filter_map(|(term, weight)| longer.get(term).map(|other| weight * other))
            .sum()
    }
}

fn tokenize(text: &str, stop_words: &HashSet<&str>) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !stop_words.contains(token))
        .map(str::to_string)
        .collect()
}

fn l2_normalize(vector: &mut HashMap<String, f64>) {
    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }
}
