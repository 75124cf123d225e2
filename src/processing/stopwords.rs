//! Stopword lists and the on-disk stopword resource

use crate::config::StopwordConfig;
use crate::error::{LazyAtsError, Result};
use log::{debug, info};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// NLTK english stopword corpus, one word per line.
pub const BUILTIN_ENGLISH: &str = include_str!("../../data/stopwords/english");

static ENGLISH: OnceLock<Arc<StopWords>> = OnceLock::new();

/// Read-only set of words excluded from keyword matching.
#[derive(Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
    source: String,
}

impl StopWords {
    /// Shared built-in English list. Parsed on first use, then reused.
    pub fn english() -> Arc<StopWords> {
        ENGLISH
            .get_or_init(|| Arc::new(Self::parse(BUILTIN_ENGLISH, "builtin:english")))
            .clone()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            source: "custom".to_string(),
        }
    }

    /// Parse a one-word-per-line list. Blank lines and `#` comments are skipped.
    pub fn parse(contents: &str, source: impl Into<String>) -> Self {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        Self {
            words,
            source: source.into(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LazyAtsError::Stopwords(format!(
                "Failed to read stopword list '{}': {}",
                path.display(),
                e
            ))
        })?;

        let stop_words = Self::parse(&contents, path.display().to_string());
        if stop_words.is_empty() {
            return Err(LazyAtsError::Stopwords(format!(
                "Stopword list '{}' contains no words",
                path.display()
            )));
        }

        debug!("Loaded {} stopwords from {}", stop_words.len(), path.display());
        Ok(stop_words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Where this list came from, for reports and logs.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Words in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl fmt::Debug for StopWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopWords")
            .field("source", &self.source)
            .field("len", &self.words.len())
            .finish()
    }
}

/// Manages the installed stopword file under the cache directory.
pub struct StopwordStore {
    cache_dir: PathBuf,
    language: String,
}

impl StopwordStore {
    pub fn new(cache_dir: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            language: language.into().to_lowercase(),
        }
    }

    pub fn from_config(config: &StopwordConfig) -> Self {
        Self::new(&config.cache_dir, &config.language)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn resource_path(&self) -> PathBuf {
        self.cache_dir.join(&self.language)
    }

    pub fn is_installed(&self) -> bool {
        self.resource_path().is_file()
    }

    /// Write the bundled list for this language into the cache directory.
    ///
    /// An existing file is kept unless `force` is set, so a hand-edited list
    /// survives repeated installs.
    pub fn install(&self, force: bool) -> Result<PathBuf> {
        let path = self.resource_path();
        if !force && path.is_file() {
            debug!("Stopword list already installed at {}", path.display());
            return Ok(path);
        }

        let contents = bundled_list(&self.language).ok_or_else(|| {
            LazyAtsError::Stopwords(format!(
                "No bundled stopword list for language '{}'; set stopwords.custom_path instead",
                self.language
            ))
        })?;

        std::fs::create_dir_all(&self.cache_dir)?;
        std::fs::write(&path, contents)?;
        info!("Installed {} stopword list to {}", self.language, path.display());
        Ok(path)
    }

    /// Install the list if it is not present yet.
    pub fn ensure(&self) -> Result<PathBuf> {
        if self.is_installed() {
            Ok(self.resource_path())
        } else {
            self.install(false)
        }
    }

    pub fn load(&self) -> Result<StopWords> {
        let path = self.ensure()?;
        StopWords::from_file(&path)
    }
}

fn bundled_list(language: &str) -> Option<&'static str> {
    match language {
        "english" | "en" => Some(BUILTIN_ENGLISH),
        _ => None,
    }
}

/// Resolve the stopword list a run should use.
///
/// This is the only point where the resource can be missing; it runs once at
/// startup and the result is shared for the rest of the process.
pub fn resolve(config: &StopwordConfig) -> Result<Arc<StopWords>> {
    if let Some(custom_path) = &config.custom_path {
        info!("Using custom stopword list: {}", custom_path.display());
        return Ok(Arc::new(StopWords::from_file(custom_path)?));
    }

    let store = StopwordStore::from_config(config);
    let stop_words = store.load()?;
    debug!(
        "Resolved {} stopwords ({})",
        stop_words.len(),
        stop_words.source()
    );
    Ok(Arc::new(stop_words))
}
