//! Résumé improvement suggestions: three independent checks over the job
//! description and résumé text. Each check that fires contributes exactly
//! one suggestion, in check order — no ranking, no deduplication.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use regex::Regex;

use super::vocab::Vocabulary;

/// How many missing keywords a single suggestion names.
const MAX_NAMED_KEYWORDS: usize = 5;

pub struct Advisor {
    vocab: Arc<Vocabulary>,
    percent_pattern: Regex,
    count_pattern: Regex,
    impact_pattern: Regex,
}

impl Advisor {
    pub fn new(vocab: Arc<Vocabulary>) -> Result<Self> {
        let verbs = vocab
            .impact_verbs
            .iter()
            .map(|v| regex::escape(v))
            .collect::<Vec<_>>()
            .join("|");
        Ok(Self {
            percent_pattern: Regex::new(r"\b\d+%").context("percent pattern")?,
            count_pattern: Regex::new(r"\b\d+\+").context("count pattern")?,
            impact_pattern: Regex::new(&format!(r"\b(?:{verbs})\b"))
                .context("impact verb pattern")?,
            vocab,
        })
    }

    /// Runs all three checks; none short-circuits the others.
    pub fn suggest(&self, job_desc: &str, resume_text: &str) -> Vec<String> {
        let resume_keywords: HashSet<String> = resume_text
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let mut suggestions = Vec::new();
        if let Some(s) = self.missing_keyword_suggestion(job_desc, &resume_keywords) {
            suggestions.push(s);
        }
        if let Some(s) = self.quantifiable_results_suggestion(resume_text) {
            suggestions.push(s);
        }
        if let Some(s) = self.soft_skill_suggestion(&resume_keywords) {
            suggestions.push(s);
        }
        suggestions
    }

    /// Job-description tokens absent from the résumé token set, kept in
    /// first-occurrence order so output is stable across runs. Whitespace
    /// tokenization, case-folded, no stemming, no stopword removal — though
    /// content words are named ahead of function words.
    fn missing_keyword_suggestion(
        &self,
        job_desc: &str,
        resume_keywords: &HashSet<String>,
    ) -> Option<String> {
        let mut seen = HashSet::new();
        let mut missing = Vec::new();
        for token in job_desc.to_lowercase().split_whitespace() {
            if resume_keywords.contains(token) || !seen.insert(token.to_string()) {
                continue;
            }
            missing.push(token.to_string());
        }
        if missing.is_empty() {
            return None;
        }

        // Stable partition keeps first-occurrence order within each group.
        let (content, function): (Vec<_>, Vec<_>) =
            missing.into_iter().partition(|t| !self.vocab.is_stopword(t));
        let named: Vec<String> = content
            .into_iter()
            .chain(function)
            .take(MAX_NAMED_KEYWORDS)
            .collect();

        Some(format!(
            "You may want to highlight skills like: {}.",
            named.join(", ")
        ))
    }

    /// Fires only when the résumé shows no percentages, no "N+" counts, and
    /// none of the impact verbs.
    fn quantifiable_results_suggestion(&self, resume_text: &str) -> Option<String> {
        let lowered = resume_text.to_lowercase();
        let has_quantifiable = self.percent_pattern.is_match(&lowered)
            || self.count_pattern.is_match(&lowered)
            || self.impact_pattern.is_match(&lowered);
        if has_quantifiable {
            return None;
        }
        Some(
            "Consider adding **quantifiable results**, such as 'Reduced migration time \
             by 40%' or 'Optimized data processing by 25%'."
                .to_string(),
        )
    }

    /// Lists every soft-skill vocabulary term absent from the résumé token
    /// set, in vocabulary order.
    fn soft_skill_suggestion(&self, resume_keywords: &HashSet<String>) -> Option<String> {
        let missing: Vec<&str> = self
            .vocab
            .soft_skills
            .iter()
            .filter(|skill| !resume_keywords.contains(*skill))
            .map(String::as_str)
            .collect();
        if missing.is_empty() {
            return None;
        }
        Some(format!(
            "Consider mentioning soft skills like {} to strengthen your resume.",
            missing.join(", ")
        ))
    }
}
