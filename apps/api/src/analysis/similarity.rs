//! Lexical and semantic similarity between two texts.
//!
//! TF-IDF rewards exact term overlap; the semantic scorer captures
//! paraphrase-level overlap. Blending the two keeps a reworded résumé from
//! bottoming out on lexical mismatch while exact keyword hits still count.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;

use crate::errors::AppError;

/// Feature-hash dimension for the default semantic backend.
const DEFAULT_DIMENSIONS: usize = 512;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

// ────────────────────────────────────────────────────────────────────────────
// TF-IDF
// ────────────────────────────────────────────────────────────────────────────

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

/// Word tokens of length ≥ 2, lowercased.
fn tokens(text: &str) -> Vec<String> {
    let re = TOKEN_RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("valid token pattern"));
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

fn term_counts(tokens: &[String]) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Cosine similarity between TF-IDF vectors built over exactly the two input
/// texts, as a percentage rounded to 2 decimals.
///
/// Identical texts score 100.00; texts sharing no tokens score 0.00. Uses
/// smoothed IDF (`ln((1+n)/(1+df)) + 1` with n = 2), so shared terms weigh
/// 1.0 and unshared terms ~1.41.
pub fn tfidf_similarity(a: &str, b: &str) -> f64 {
    let tokens_a = tokens(a);
    let tokens_b = tokens(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let counts_a = term_counts(&tokens_a);
    let counts_b = term_counts(&tokens_b);

    let mut vocabulary: HashSet<&String> = counts_a.keys().collect();
    vocabulary.extend(counts_b.keys());

    let mut vec_a = Vec::with_capacity(vocabulary.len());
    let mut vec_b = Vec::with_capacity(vocabulary.len());
    for term in &vocabulary {
        let df = u32::from(counts_a.contains_key(*term)) + u32::from(counts_b.contains_key(*term));
        let idf = (3.0 / (1.0 + f64::from(df))).ln() + 1.0;
        vec_a.push(f64::from(*counts_a.get(*term).unwrap_or(&0)) * idf);
        vec_b.push(f64::from(*counts_b.get(*term).unwrap_or(&0)) * idf);
    }

    round2(cosine(&vec_a, &vec_b) * 100.0)
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Semantic scoring
// ────────────────────────────────────────────────────────────────────────────

/// Whole-document semantic similarity in [0, 100].
///
/// Carried in `AppState` as `Arc<dyn SemanticScorer>` so a model-backed
/// backend can replace the default without touching handler code.
#[async_trait]
pub trait SemanticScorer: Send + Sync {
    async fn similarity(&self, a: &str, b: &str) -> Result<f64, AppError>;
}

/// Default semantic backend: deterministic character-trigram feature hashing.
/// No model download, no network, stable across runs.
///
/// Texts with disjoint vocabularies still share trigram mass ("ing", "the"),
/// so the score is rarely exactly 0.
pub struct HashedNgramScorer {
    dimensions: usize,
}

impl Default for HashedNgramScorer {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
        }
    }
}

#[async_trait]
impl SemanticScorer for HashedNgramScorer {
    async fn similarity(&self, a: &str, b: &str) -> Result<f64, AppError> {
        let vec_a = self.embed(a);
        let vec_b = self.embed(b);
        Ok(round2(cosine(&vec_a, &vec_b).clamp(0.0, 1.0) * 100.0))
    }
}

impl HashedNgramScorer {
    /// Accumulates hashed character trigrams into a fixed-dimension vector.
    /// Non-alphanumeric characters collapse to spaces so punctuation does
    /// not perturb the fingerprint.
    fn embed(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.dimensions];
        let chars: Vec<char> = text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();

        for window in chars.windows(3) {
            if window.iter().all(|c| *c == ' ') {
                continue;
            }
            let mut hash = FNV_OFFSET;
            let mut buf = [0u8; 4];
            for c in window {
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    hash ^= u64::from(*byte);
                    hash = hash.wrapping_mul(FNV_PRIME);
                }
            }
            vector[(hash % self.dimensions as u64) as usize] += 1.0;
        }
        vector
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Hybrid blend
// ────────────────────────────────────────────────────────────────────────────

/// Unweighted average of the lexical and semantic components, rounded to
/// 2 decimals. Always lies within the min/max of the two components.
pub async fn hybrid_similarity(
    a: &str,
    b: &str,
    scorer: &dyn SemanticScorer,
) -> Result<f64, AppError> {
    let tfidf = tfidf_similarity(a, b);
    let semantic = scorer.similarity(a, b).await?;
    Ok(round2(0.5 * tfidf + 0.5 * semantic))
}
