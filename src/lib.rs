//! Lazy ATS checker library
//!
//! Extracts keyword sets from a job description and a resume and reports how
//! much of the job's vocabulary the resume covers.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{LazyAtsError, Result};
pub use processing::keyword_extractor::{KeywordExtractor, KeywordSet};
pub use processing::scorer::{score_keywords, MatchResult};
pub use processing::stopwords::StopWords;
