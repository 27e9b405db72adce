//! Skill extraction: recognizes technical-term vocabulary entries in free
//! text, including multi-word phrases.

use std::collections::BTreeSet;

use aho_corasick::{AhoCorasick, MatchKind};
use anyhow::{Context, Result};

use super::vocab::Vocabulary;

/// Matches the technical-term vocabulary against text.
///
/// Matching is automaton-based rather than token-based, so multi-word terms
/// like "machine learning" are found as readily as single tokens. Longest
/// match wins where terms overlap.
pub struct SkillExtractor {
    automaton: AhoCorasick,
    terms: Vec<String>,
}

impl SkillExtractor {
    pub fn new(vocab: &Vocabulary) -> Result<Self> {
        let terms = vocab.technical_terms.clone();
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&terms)
            .context("Failed to build skill automaton")?;
        Ok(Self { automaton, terms })
    }

    /// Returns every vocabulary term present in `text`, lowercased.
    ///
    /// Matches must sit on word boundaries: "java" inside "javascript" does
    /// not count, nor does "api" inside "rapid".
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let mut skills = BTreeSet::new();
        for mat in self.automaton.find_iter(text) {
            if !on_word_boundary(text, mat.start(), mat.end()) {
                continue;
            }
            skills.insert(self.terms[mat.pattern().as_usize()].clone());
        }
        skills
    }
}

/// A match counts only if it is not embedded in a longer alphanumeric run.
fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SkillExtractor {
        let vocab = Vocabulary::load(None).unwrap();
        SkillExtractor::new(&vocab).unwrap()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_token_terms() {
        let skills = extractor().extract_skills("Python developer with AWS experience");
        assert_eq!(skills, set(&["aws", "python"]));
    }

    #[test]
    fn test_multi_word_terms_are_detected() {
        let skills =
            extractor().extract_skills("Built machine learning pipelines on big data platforms");
        assert!(skills.contains("machine learning"));
        assert!(skills.contains("big data"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let skills = extractor().extract_skills("DOCKER and Kubernetes");
        assert_eq!(skills, set(&["docker", "kubernetes"]));
    }

    #[test]
    fn test_embedded_terms_do_not_match() {
        // "java" sits inside "javascript", "api" inside "rapid"
        let skills = extractor().extract_skills("javascript for rapid prototyping");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_punctuated_terms() {
        let skills = extractor().extract_skills("Shipped node.js services, C++ tooling.");
        assert!(skills.contains("node.js"));
        assert!(skills.contains("c++"));
    }

    #[test]
    fn test_no_terms_yields_empty_set() {
        assert!(extractor().extract_skills("I enjoy hiking and cooking").is_empty());
    }
}
