//! Vocabulary data: technical terms, soft skills, impact verbs, stopwords.
//!
//! Shipped as a JSON asset (embedded at compile time, overridable via
//! `VOCAB_PATH`) so term lists can change without touching code.

use std::collections::HashSet;
use std::fs;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

const EMBEDDED_VOCABULARY: &str = include_str!("../../assets/vocabulary.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Vocabulary {
    /// Technical terms recognized by the skill extractor. May be multi-word.
    pub technical_terms: Vec<String>,
    /// Soft skills the advisor checks for, in listing order.
    pub soft_skills: Vec<String>,
    /// Verbs that count as evidence of quantified impact.
    pub impact_verbs: Vec<String>,
    /// Function words deprioritized when naming missing keywords.
    pub stopwords: HashSet<String>,
}

impl Vocabulary {
    /// Loads the vocabulary from `path`, or the embedded asset when `None`.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let raw = match path {
            Some(p) => fs::read_to_string(p)
                .with_context(|| format!("Failed to read vocabulary file '{p}'"))?,
            None => EMBEDDED_VOCABULARY.to_string(),
        };
        let vocab: Vocabulary =
            serde_json::from_str(&raw).context("Vocabulary file is not valid JSON")?;
        vocab.validate()?;
        Ok(vocab)
    }

    /// All matching is done against lowercased text, so the term lists must
    /// be lowercase themselves. Catch a bad edit at startup, not per request.
    fn validate(&self) -> Result<()> {
        ensure!(
            !self.technical_terms.is_empty(),
            "technical_terms must not be empty"
        );
        ensure!(!self.soft_skills.is_empty(), "soft_skills must not be empty");
        ensure!(!self.impact_verbs.is_empty(), "impact_verbs must not be empty");
        for term in self
            .technical_terms
            .iter()
            .chain(&self.soft_skills)
            .chain(&self.impact_verbs)
        {
            ensure!(!term.trim().is_empty(), "vocabulary terms must not be blank");
            ensure!(
                *term == term.to_lowercase(),
                "vocabulary term '{term}' must be lowercase"
            );
        }
        Ok(())
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}
