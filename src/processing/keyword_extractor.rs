//! Keyword extraction: normalize, tokenize, drop stopwords

use crate::processing::stopwords::StopWords;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::hash_set;
use std::collections::HashSet;
use std::sync::Arc;

/// Unique keywords extracted from one document. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(HashSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn insert(&mut self, keyword: impl Into<String>) -> bool {
        self.0.insert(keyword.into())
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.0.iter()
    }

    /// Keywords present in both sets.
    pub fn intersection(&self, other: &KeywordSet) -> KeywordSet {
        self.0.intersection(&other.0).cloned().collect()
    }

    /// Keywords in `self` that `other` lacks.
    pub fn difference(&self, other: &KeywordSet) -> KeywordSet {
        self.0.difference(&other.0).cloned().collect()
    }

    /// Keywords in lexicographic order, for display.
    pub fn sorted(&self) -> Vec<String> {
        let mut keywords: Vec<String> = self.0.iter().cloned().collect();
        keywords.sort_unstable();
        keywords
    }
}

impl FromIterator<String> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_owned).collect())
    }
}

impl IntoIterator for KeywordSet {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Turns raw text into a [`KeywordSet`] using a fixed stopword list.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: Arc<StopWords>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::english()
    }
}

impl KeywordExtractor {
    pub fn new(stop_words: Arc<StopWords>) -> Self {
        Self { stop_words }
    }

    /// Extractor backed by the built-in English stopword list
    pub fn english() -> Self {
        Self::new(StopWords::english())
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Extract the keyword set of `text`.
    ///
    /// ASCII punctuation is deleted rather than replaced, so compounds such as
    /// `state-of-the-art` collapse into a single token (`stateoftheart`).
    /// Never fails; empty or whitespace-only input yields an empty set.
    pub fn extract(&self, text: &str) -> KeywordSet {
        if text.is_empty() {
            return KeywordSet::new();
        }

        let normalized = strip_punctuation(&text.to_lowercase());

        let mut token_count = 0usize;
        let keywords: KeywordSet = normalized
            .split_whitespace()
            .inspect(|_| token_count += 1)
            .filter(|token| !self.stop_words.contains(token))
            .collect();

        trace!(
            "Extracted {} keywords from {} tokens",
            keywords.len(),
            token_count
        );
        keywords
    }

    /// Like [`extract`](Self::extract), treating a missing text as empty.
    pub fn extract_optional(&self, text: Option<&str>) -> KeywordSet {
        match text {
            Some(text) => self.extract(text),
            None => KeywordSet::new(),
        }
    }
}

/// Delete every ASCII punctuation character (``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``).
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().copied().collect()
    }

    #[test]
    fn test_empty_input() {
        let extractor = KeywordExtractor::english();

        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("   \n\t  ").is_empty());
        assert!(extractor.extract_optional(None).is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = KeywordExtractor::english();
        let text = "Senior Rust engineer: async, Tokio, gRPC & Kubernetes (on-call).";

        assert_eq!(extractor.extract(text), extractor.extract(text));
    }

    #[test]
    fn test_case_insensitive() {
        let extractor = KeywordExtractor::english();

        assert_eq!(
            extractor.extract("Experience with Python"),
            extractor.extract("experience with python")
        );
        assert!(extractor.extract("PYTHON").contains("python"));
    }

    #[test]
    fn test_punctuation_joins_compounds() {
        let extractor = KeywordExtractor::new(Arc::new(StopWords::from_words(["the"])));

        assert_eq!(extractor.extract("state-of-the-art"), set(&["stateoftheart"]));
        assert_eq!(extractor.extract("CI/CD"), set(&["cicd"]));
        assert_eq!(extractor.extract("Node.js, C++"), set(&["nodejs", "c"]));
    }

    #[test]
    fn test_stopwords_removed() {
        let extractor = KeywordExtractor::new(Arc::new(StopWords::from_words(["the"])));
        assert_eq!(extractor.extract("the quick fox"), set(&["quick", "fox"]));
    }

    #[test]
    fn test_apostrophes_stripped_before_stopword_check() {
        // "don't" becomes "dont", which is not in the list
        let keywords = KeywordExtractor::english().extract("Don't panic");
        assert_eq!(keywords, set(&["dont", "panic"]));
    }

    #[test]
    fn test_duplicates_collapse() {
        let keywords = KeywordExtractor::english().extract("Rust rust RUST, rust!");
        assert_eq!(keywords.len(), 1);
    }

    #[test]
    fn test_punctuation_only_tokens_vanish() {
        let keywords = KeywordExtractor::english().extract("-- ... ?! python");
        assert_eq!(keywords, set(&["python"]));
    }

    #[test]
    fn test_non_ascii_punctuation_kept() {
        let keywords = KeywordExtractor::english().extract("Café ¿qué?");
        assert_eq!(keywords, set(&["café", "¿qué"]));
    }

    #[test]
    fn test_set_operations() {
        let jd = set(&["python", "sql", "aws"]);
        let resume = set(&["python", "aws", "docker"]);

        assert_eq!(jd.intersection(&resume), set(&["python", "aws"]));
        assert_eq!(jd.difference(&resume), set(&["sql"]));
        assert_eq!(jd.sorted(), vec!["aws", "python", "sql"]);
    }
}
