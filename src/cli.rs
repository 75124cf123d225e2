//! CLI interface for the ATS checker

use crate::config::OutputFormat;
use crate::input::InputSource;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lazy-ats")]
#[command(version)]
#[command(about = "Check how many job-description keywords your resume covers")]
#[command(long_about = "Extracts keywords from a job description and a resume (lowercased, punctuation and stopwords removed) and reports the share of job keywords found in the resume, plus the ones that are missing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Check(CheckArgs),

    /// Manage the stopword list
    Stopwords {
        #[command(subcommand)]
        action: StopwordAction,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args)]
pub struct CheckArgs {
    /// Path to job description file (PDF, TXT, MD)
    #[arg(short, long, conflicts_with = "job_text", required_unless_present = "job_text")]
    pub job: Option<PathBuf>,

    /// Job description text given directly
    #[arg(long)]
    pub job_text: Option<String>,

    /// Path to resume file (PDF, TXT, MD)
    #[arg(short, long, conflicts_with = "resume_text", required_unless_present = "resume_text")]
    pub resume: Option<PathBuf>,

    /// Resume text given directly
    #[arg(long)]
    pub resume_text: Option<String>,

    /// Also list matched keywords and run details
    #[arg(short, long)]
    pub detailed: bool,

    /// Output format: console, json, markdown, html
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file (or into a directory, with a generated name)
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Stopword list to use instead of the configured one (one word per line)
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Pass threshold in percent (overrides scoring.pass_threshold)
    #[arg(long)]
    pub threshold: Option<f64>,
}

impl CheckArgs {
    pub fn job_source(&self) -> InputSource {
        to_source(&self.job, &self.job_text)
    }

    pub fn resume_source(&self) -> InputSource {
        to_source(&self.resume, &self.resume_text)
    }
}

fn to_source(path: &Option<PathBuf>, text: &Option<String>) -> InputSource {
    match (path, text) {
        (Some(path), _) => InputSource::File(path.clone()),
        (None, Some(text)) => InputSource::Inline(text.clone()),
        (None, None) => InputSource::Inline(String::new()),
    }
}

#[derive(Subcommand)]
pub enum StopwordAction {
    /// Print the active stopword list
    Show {
        /// Print at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Install the bundled list into the cache directory
    Install {
        /// Overwrite an existing list
        #[arg(short, long)]
        force: bool,
    },

    /// Print where the stopword list is stored
    Path,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" | "text" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_with_files() {
        let cli = Cli::parse_from(["lazy-ats", "check", "-j", "jd.txt", "-r", "cv.pdf", "-d"]);

        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.job_source(), InputSource::File(PathBuf::from("jd.txt")));
                assert_eq!(args.resume_source(), InputSource::File(PathBuf::from("cv.pdf")));
                assert!(args.detailed);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_check_with_inline_text() {
        let cli = Cli::parse_from([
            "lazy-ats",
            "check",
            "--job-text",
            "Must know Python",
            "--resume-text",
            "I know Python",
        ]);

        match cli.command {
            Commands::Check(args) => {
                assert_eq!(
                    args.job_source(),
                    InputSource::Inline("Must know Python".to_string())
                );
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_check_requires_both_documents() {
        assert!(Cli::try_parse_from(["lazy-ats", "check", "-j", "jd.txt"]).is_err());
        assert!(Cli::try_parse_from([
            "lazy-ats", "check", "-j", "jd.txt", "--job-text", "x", "-r", "cv.txt"
        ])
        .is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert_eq!(parse_output_format("json"), Ok(OutputFormat::Json));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "txt", "md"];
        assert!(validate_file_extension(Path::new("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("cv"), &allowed).is_err());
    }
}
