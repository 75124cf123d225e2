//! Comparison pipeline: extract both documents, then score

use crate::processing::keyword_extractor::{KeywordExtractor, KeywordSet};
use crate::processing::scorer::{score_keywords, MatchResult};
use crate::processing::stopwords::StopWords;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Runs one job-description/resume comparison at a time. Holds no per-run state.
#[derive(Debug, Clone)]
pub struct KeywordAnalyzer {
    extractor: KeywordExtractor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub job_keywords: KeywordSet,
    pub resume_keywords: KeywordSet,
    pub result: MatchResult,
    pub processing_time_ms: u64,
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}

impl KeywordAnalyzer {
    pub fn new(stop_words: Arc<StopWords>) -> Self {
        Self {
            extractor: KeywordExtractor::new(stop_words),
        }
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    /// Compare `resume_text` against `job_text`.
    pub fn analyze(&self, job_text: &str, resume_text: &str) -> KeywordAnalysis {
        let start = Instant::now();

        let job_keywords = self.extractor.extract(job_text);
        let resume_keywords = self.extractor.extract(resume_text);
        debug!(
            "Keywords extracted: job={}, resume={}",
            job_keywords.len(),
            resume_keywords.len()
        );

        let result = score_keywords(&job_keywords, &resume_keywords);
        let processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            "Match score {:.1}% ({} of {} job keywords, {} missing)",
            result.score,
            result.matched_keywords.len(),
            job_keywords.len(),
            result.missing_keywords.len()
        );

        KeywordAnalysis {
            job_keywords,
            resume_keywords,
            result,
            processing_time_ms,
        }
    }
}
