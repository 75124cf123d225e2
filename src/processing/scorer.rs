//! Keyword-overlap scoring

use crate::processing::keyword_extractor::KeywordSet;
use serde::{Deserialize, Serialize};

/// Outcome of comparing job-description keywords with resume keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Percentage of job keywords found in the resume, 0.0 to 100.0, unrounded
    pub score: f64,
    /// Job keywords absent from the resume
    pub missing_keywords: KeywordSet,
    /// Job keywords the resume also contains
    pub matched_keywords: KeywordSet,
}

impl MatchResult {
    fn empty() -> Self {
        Self {
            score: 0.0,
            missing_keywords: KeywordSet::new(),
            matched_keywords: KeywordSet::new(),
        }
    }
}

/// Score `resume_keywords` against `jd_keywords`.
///
/// An empty job set scores 0.0 with nothing missing, not 100.0.
pub fn score_keywords(jd_keywords: &KeywordSet, resume_keywords: &KeywordSet) -> MatchResult {
    if jd_keywords.is_empty() {
        return MatchResult::empty();
    }

    let matched_keywords = jd_keywords.intersection(resume_keywords);
    let score = (matched_keywords.len() as f64 / jd_keywords.len() as f64) * 100.0;
    let missing_keywords = jd_keywords.difference(resume_keywords);

    MatchResult {
        score,
        missing_keywords,
        matched_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().copied().collect()
    }

    #[test]
    fn test_empty_job_keywords() {
        let result = score_keywords(&KeywordSet::new(), &set(&["python", "rust"]));

        assert_eq!(result.score, 0.0);
        assert!(result.missing_keywords.is_empty());
        assert!(result.matched_keywords.is_empty());

        let result = score_keywords(&KeywordSet::new(), &KeywordSet::new());
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_partial_match() {
        let result = score_keywords(&set(&["python", "sql", "aws"]), &set(&["python", "aws"]));

        assert!((result.score - 66.666_666).abs() < 1e-4);
        assert_eq!(result.missing_keywords, set(&["sql"]));
        assert_eq!(result.matched_keywords, set(&["python", "aws"]));
    }

    #[test]
    fn test_identical_sets_score_full() {
        let keywords = set(&["python", "sql", "aws"]);
        let result = score_keywords(&keywords, &keywords);

        assert_eq!(result.score, 100.0);
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_empty_resume_keywords() {
        let jd = set(&["python", "sql"]);
        let result = score_keywords(&jd, &KeywordSet::new());

        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing_keywords, jd);
    }

    #[test]
    fn test_extra_resume_keywords_do_not_count() {
        let result = score_keywords(&set(&["rust"]), &set(&["rust", "go", "java"]));
        assert_eq!(result.score, 100.0);
    }
}
