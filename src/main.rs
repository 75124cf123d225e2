//! lazy-ats: keyword-overlap check of a resume against a job description

use anyhow::{Context, Result};
use clap::Parser;
use lazy_ats_checker::cli::{self, CheckArgs, Cli, Commands, ConfigAction, StopwordAction};
use lazy_ats_checker::config::Config;
use lazy_ats_checker::input::{file_detector::FileType, InputManager, InputSource};
use lazy_ats_checker::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use lazy_ats_checker::output::report::{MatchReport, ReportContext};
use lazy_ats_checker::processing::analyzer::KeywordAnalyzer;
use lazy_ats_checker::processing::stopwords::{self, StopWords, StopwordStore};
use log::{error, info};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Check(args) => run_check(args, config).await,
        Commands::Stopwords { action } => run_stopwords(action, config),
        Commands::Config { action } => run_config(action, config),
    }
}

async fn run_check(args: CheckArgs, mut config: Config) -> Result<()> {
    if let Some(path) = &args.stopwords {
        config.stopwords.custom_path = Some(path.clone());
    }
    if let Some(threshold) = args.threshold {
        anyhow::ensure!(
            (0.0..=100.0).contains(&threshold),
            "--threshold must be between 0 and 100, got {}",
            threshold
        );
        config.scoring.pass_threshold = threshold;
    }

    let output_format = match &args.output {
        Some(format) => cli::parse_output_format(format).map_err(anyhow::Error::msg)?,
        None => config.output.format,
    };

    let job_source = args.job_source();
    let resume_source = args.resume_source();
    for (label, source) in [("Job description", &job_source), ("Resume", &resume_source)] {
        if let InputSource::File(path) = source {
            cli::validate_file_extension(path, FileType::SUPPORTED_EXTENSIONS)
                .map_err(|e| anyhow::anyhow!("{} file: {}", label, e))?;
        }
    }

    let stop_words: Arc<StopWords> =
        stopwords::resolve(&config.stopwords).context("Failed to load stopword list")?;

    let mut input_manager = InputManager::new();
    let job_text = input_manager
        .read_required("job description", &job_source)
        .await
        .with_context(|| format!("Reading job description from {}", job_source.describe()))?;
    let resume_text = input_manager
        .read_required("resume", &resume_source)
        .await
        .with_context(|| format!("Reading resume from {}", resume_source.describe()))?;

    info!(
        "Comparing {} ({} chars) against {} ({} chars)",
        resume_source.describe(),
        resume_text.len(),
        job_source.describe(),
        job_text.len()
    );

    let context = ReportContext {
        job_source: job_source.describe(),
        resume_source: resume_source.describe(),
        stopword_source: stop_words.source().to_string(),
        stopword_count: stop_words.len(),
    };

    let analyzer = KeywordAnalyzer::new(stop_words);
    let analysis = analyzer.analyze(&job_text, &resume_text);
    let report = MatchReport::build(&analysis, context, config.scoring.pass_threshold);

    let detailed = args.detailed || config.output.detailed;
    // Saved reports never carry terminal color codes
    let use_colors = config.output.color_output && args.save.is_none();
    let generator = ReportGenerator::with_options(use_colors, detailed, config.output.pretty_json);
    let rendered = generator.generate_report(&report, &output_format)?;

    match &args.save {
        Some(target) => {
            // A directory target gets a generated file name
            let path = if target.is_dir() {
                target.join(suggest_filename(
                    &output_format,
                    &resume_source.describe(),
                    true,
                ))
            } else {
                target.clone()
            };
            save_report_to_file(&rendered, &path)
                .with_context(|| format!("Saving report to {}", path.display()))?;
            println!(
                "Match Score: {}% (report saved to {})",
                report.summary.score_display,
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn run_stopwords(action: StopwordAction, config: Config) -> Result<()> {
    let store = StopwordStore::from_config(&config.stopwords);

    match action {
        StopwordAction::Show { limit } => {
            let stop_words = stopwords::resolve(&config.stopwords)?;
            println!("Stopwords: {} ({} words)\n", stop_words.source(), stop_words.len());

            let words = stop_words.sorted();
            let shown = limit.unwrap_or(words.len()).min(words.len());
            println!("{}", words[..shown].join(", "));
            if shown < words.len() {
                println!("... and {} more", words.len() - shown);
            }
        }

        StopwordAction::Install { force } => {
            let already_installed = store.is_installed();
            let path = store.install(force)?;
            if already_installed && !force {
                println!("Stopword list already installed: {}", path.display());
                println!("Use --force to overwrite it with the bundled list");
            } else {
                println!("Installed {} stopwords to {}", store.language(), path.display());
            }
        }

        StopwordAction::Path => match &config.stopwords.custom_path {
            Some(custom) => println!("{} (custom)", custom.display()),
            None => println!("{}", store.resource_path().display()),
        },
    }

    Ok(())
}

fn run_config(action: Option<ConfigAction>, config: Config) -> Result<()> {
    match action {
        Some(ConfigAction::Show) | None => {
            println!("Current Configuration\n");
            println!("Stopword language: {}", config.stopwords.language);
            println!("Stopword cache: {}", config.stopwords.cache_dir.display());
            match &config.stopwords.custom_path {
                Some(path) => println!("Custom stopwords: {}", path.display()),
                None => println!("Custom stopwords: (none)"),
            }
            println!("Pass threshold: {:.1}%", config.scoring.pass_threshold);
            println!("Output format: {:?}", config.output.format);
            println!("Detailed output: {}", config.output.detailed);
            println!("Colors: {}", config.output.color_output);
        }

        Some(ConfigAction::Reset) => {
            Config::default().save()?;
            println!("Configuration reset: {}", Config::config_path().display());
        }

        Some(ConfigAction::Path) => {
            println!("{}", Config::config_path().display());
        }
    }

    Ok(())
}
