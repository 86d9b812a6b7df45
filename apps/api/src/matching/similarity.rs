//! Skill similarity: TF-IDF vectors over a two-document corpus, compared by cosine.
//!
//! The vectorizer uses the conventional defaults: lower-cased tokens of two or
//! more word characters, raw term counts, smoothed idf
//! `ln((1 + n) / (1 + df)) + 1`, and L2-normalized rows. Skill names ending in
//! `+` or `#` (`c++`, `c#`) are kept whole so they never vanish from the
//! vocabulary.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w[\w+#]*[+#]|\b\w\w+\b").expect("token pattern is valid"));

/// Pluggable text-similarity backend used by the match engine.
pub trait SimilarityScorer: Send + Sync {
    /// Similarity of two free-text token bags, in `[0, 1]`.
    /// Either side empty yields `0.0`.
    fn similarity(&self, left: &str, right: &str) -> f64;
}

/// Default scorer: TF-IDF fitted on exactly the two inputs, then cosine.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfCosine;

impl SimilarityScorer for TfIdfCosine {
    fn similarity(&self, left: &str, right: &str) -> f64 {
        tfidf_cosine(left, right)
    }
}

fn term_counts(document: &str) -> BTreeMap<String, u32> {
    let lowered = document.to_lowercase();
    let mut counts = BTreeMap::new();
    for m in TOKEN_PATTERN.find_iter(&lowered) {
        *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

pub fn tfidf_cosine(left: &str, right: &str) -> f64 {
    if left.trim().is_empty() || right.trim().is_empty() {
        return 0.0;
    }

    let docs = [term_counts(left), term_counts(right)];
    if docs.iter().any(BTreeMap::is_empty) {
        return 0.0;
    }

    // BTreeSet keeps the summation order fixed, so results are reproducible.
    let vocabulary: BTreeSet<&String> = docs.iter().flat_map(|d| d.keys()).collect();
    let n_docs = docs.len() as f64;

    let mut dot = 0.0_f64;
    let mut norm_left = 0.0_f64;
    let mut norm_right = 0.0_f64;

    for term in vocabulary {
        let df = docs.iter().filter(|d| d.contains_key(term)).count() as f64;
        let idf = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;

        let wl = f64::from(docs[0].get(term).copied().unwrap_or(0)) * idf;
        let wr = f64::from(docs[1].get(term).copied().unwrap_or(0)) * idf;

        dot += wl * wr;
        norm_left += wl * wl;
        norm_right += wr * wr;
    }

    if norm_left == 0.0 || norm_right == 0.0 {
        return 0.0;
    }

    (dot / (norm_left.sqrt() * norm_right.sqrt())).clamp(0.0, 1.0)
}
