//! Keyword extraction and scoring

pub mod analyzer;
pub mod keyword_extractor;
pub mod scorer;
pub mod stopwords;
