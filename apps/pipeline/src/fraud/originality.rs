//! Originality Scorer — how close a resume sits to the most similar other
//! resume in the corpus.
//!
//! This is the expensive path: every stored resume is re-read and vectorized
//! on each invocation, an O(N) full-corpus scan. Exact duplicates are caught
//! upstream by the digest check and never reach this code.

use serde::{Deserialize, Serialize};

use crate::fraud::tfidf::TfidfCorpus;

/// Outcome of an originality scan. The caller persists both fields on the
/// candidate's profile; nothing else mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalityResult {
    /// Highest similarity against any other resume, as a percentage
    /// rounded to two decimals.
    pub similarity_score: f64,
    /// True when the (unrounded) score exceeds the fraud threshold.
    pub is_flagged: bool,
}

impl OriginalityResult {
    /// The degenerate result: nothing to compare against, nothing flagged.
    pub fn clean() -> Self {
        Self {
            similarity_score: 0.0,
            is_flagged: false,
        }
    }
}

/// Scores `current_text` against every peer text.
///
/// Zero peers is the explicit short-circuit: the first resume in the system
/// (or a corpus where nobody else has a readable resume file) is `(0.0,
/// false)` without any vectorization. A peer whose extraction failed should
/// arrive here as an empty string — it contributes a zero vector and thus
/// zero similarity instead of aborting the scan.
pub fn score_originality(
    current_text: &str,
    peer_texts: &[String],
    fraud_threshold: f64,
) -> OriginalityResult {
    if peer_texts.is_empty() {
        return OriginalityResult::clean();
    }

    let mut documents = Vec::with_capacity(peer_texts.len() + 1);
    documents.push(current_text.to_string());
    documents.extend(peer_texts.iter().cloned());

    let corpus = TfidfCorpus::fit(&documents);
    let max_similarity = (1..corpus.len())
        .map(|index| corpus.cosine_similarity(0, index))
        .fold(0.0_f64, f64::max);

    let percent = max_similarity * 100.0;
    OriginalityResult {
        similarity_score: round2(percent),
        is_flagged: percent > fraud_threshold,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
