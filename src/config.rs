//! Configuration management for the ATS checker

use crate::error::{LazyAtsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub stopwords: StopwordConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwordConfig {
    /// Bundled list to install into `cache_dir` when no custom list is set
    pub language: String,
    pub cache_dir: PathBuf,
    pub custom_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Scores below this percentage are reported as at risk
    pub pass_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        let cache_dir = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("lazy-ats-checker")
            .join("stopwords");

        Self {
            language: "english".to_string(),
            cache_dir,
            custom_path: None,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pass_threshold: 80.0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl Config {
    /// Load from `explicit` if given, otherwise from the default location.
    ///
    /// A missing default file is created with default values; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(LazyAtsError::Configuration(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            return Self::load_from(path);
        }

        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            LazyAtsError::Configuration(format!("Failed to parse config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            LazyAtsError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("lazy-ats-checker")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        let threshold = self.scoring.pass_threshold;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(LazyAtsError::Configuration(format!(
                "scoring.pass_threshold must be between 0 and 100, got {}",
                threshold
            )));
        }
        if self.stopwords.language.trim().is_empty() {
            return Err(LazyAtsError::Configuration(
                "stopwords.language must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.scoring.pass_threshold, 80.0);
        assert_eq!(config.stopwords.language, "english");
        assert!(config.stopwords.custom_path.is_none());
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[scoring]\npass_threshold = 65.0\n\n[stopwords]\ncustom_path = \"/tmp/words.txt\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.scoring.pass_threshold, 65.0);
        assert_eq!(
            config.stopwords.custom_path,
            Some(PathBuf::from("/tmp/words.txt"))
        );
        assert_eq!(config.stopwords.language, "english");
        assert!(config.output.color_output);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.output.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(LazyAtsError::Configuration(_))));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\npass_threshold = 120.0\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(LazyAtsError::Configuration(_))
        ));
    }
}
