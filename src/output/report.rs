//! Match report assembled from a keyword analysis

use crate::processing::analyzer::KeywordAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a formatter needs to render one comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub summary: MatchSummary,

    /// Job keywords absent from the resume, sorted
    pub missing_keywords: Vec<String>,

    /// Job keywords found in the resume, sorted
    pub matched_keywords: Vec<String>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Unrounded match percentage
    pub score: f64,

    /// Score rounded to one decimal place, as displayed
    pub score_display: String,

    pub verdict: Verdict,
    pub pass_threshold: f64,
    pub job_keyword_count: usize,
    pub resume_keyword_count: usize,
    pub matched_keyword_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// At or above the pass threshold
    Ready,
    /// Below the pass threshold
    AtRisk,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub job_source: String,
    pub resume_source: String,
    pub stopword_source: String,
    pub stopword_count: usize,
    pub processing_time_ms: u64,
    pub version: String,
}

/// Caller-side details that do not come out of the analysis itself
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub job_source: String,
    pub resume_source: String,
    pub stopword_source: String,
    pub stopword_count: usize,
}

impl Verdict {
    pub fn from_score(score: f64, pass_threshold: f64) -> Self {
        if score < pass_threshold {
            Verdict::AtRisk
        } else {
            Verdict::Ready
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::Ready => "Great job!",
            Verdict::AtRisk => "WARNING: Low Match Score",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Verdict::Ready => "You are ready to beat the bots.",
            Verdict::AtRisk => "Your resume is likely to be rejected by the ATS.",
        }
    }
}

impl MatchReport {
    pub fn build(analysis: &KeywordAnalysis, context: ReportContext, pass_threshold: f64) -> Self {
        let result = &analysis.result;

        Self {
            summary: MatchSummary {
                score: result.score,
                score_display: format!("{:.1}", result.score),
                verdict: Verdict::from_score(result.score, pass_threshold),
                pass_threshold,
                job_keyword_count: analysis.job_keywords.len(),
                resume_keyword_count: analysis.resume_keywords.len(),
                matched_keyword_count: result.matched_keywords.len(),
            },
            missing_keywords: result.missing_keywords.sorted(),
            matched_keywords: result.matched_keywords.sorted(),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                job_source: context.job_source,
                resume_source: context.resume_source,
                stopword_source: context.stopword_source,
                stopword_count: context.stopword_count,
                processing_time_ms: analysis.processing_time_ms,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// True when the resume covers every job keyword.
    ///
    /// A job description with no keywords is not a perfect match; it scores zero.
    pub fn is_perfect_match(&self) -> bool {
        self.missing_keywords.is_empty() && self.summary.job_keyword_count > 0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::processing::analyzer::KeywordAnalyzer;

    pub(crate) fn sample_report(job: &str, resume: &str) -> MatchReport {
        let analysis = KeywordAnalyzer::default().analyze(job, resume);
        let context = ReportContext {
            job_source: "job.txt".to_string(),
            resume_source: "resume.md".to_string(),
            stopword_source: "builtin:english".to_string(),
            stopword_count: 179,
        };
        MatchReport::build(&analysis, context, 80.0)
    }

    #[test]
    fn test_score_display_one_decimal() {
        let report = sample_report("python sql aws", "python aws");

        assert_eq!(report.summary.score_display, "66.7");
        assert!((report.summary.score - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_keywords_sorted() {
        let report = sample_report("zig rust ada go", "go");

        assert_eq!(report.missing_keywords, vec!["ada", "rust", "zig"]);
        assert_eq!(report.matched_keywords, vec!["go"]);
    }

    #[test]
    fn test_verdict_threshold() {
        assert_eq!(Verdict::from_score(79.9, 80.0), Verdict::AtRisk);
        assert_eq!(Verdict::from_score(80.0, 80.0), Verdict::Ready);
        assert_eq!(Verdict::from_score(0.0, 0.0), Verdict::Ready);
    }

    #[test]
    fn test_perfect_match() {
        assert!(sample_report("rust tokio", "Rust, Tokio and more").is_perfect_match());
        assert!(!sample_report("rust tokio", "rust").is_perfect_match());
        assert!(!sample_report("", "rust").is_perfect_match());
    }
}
