//! Output formatters: console, JSON, Markdown and HTML

use crate::config::OutputFormat;
use crate::error::{LazyAtsError, Result};
use crate::output::report::{MatchReport, Verdict};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const PERFECT_MATCH: &str = "Perfect Match! You have all the keywords.";

/// Trait for rendering a match report
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
    detailed: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Lazy ATS Checker Report</title>
    {% if include_styles %}
    <style>
        body {
            background-color: #0e0e0e;
            color: #00ff00;
            font-family: 'Courier New', Courier, monospace;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
        }
        h1, h2, h3 { color: #00ff00; }
        hr { border: 0; border-top: 1px solid #333; }
        .missing-keyword { color: #ff4b4b; }
        .verdict-atrisk { color: #ff0000; font-weight: bold; }
        .verdict-ready { color: #00ff00; font-weight: bold; }
        .metadata { color: #777; font-size: 0.9em; }
    </style>
    {% endif %}
</head>
<body>
    <h1>The Lazy ATS Checker</h1>
    <h2>Match Score: {{ score_display }}%</h2>
    <hr>
    {% if has_missing %}
    <h3>Missing Keywords:</h3>
    <p class="missing-keyword">{% for keyword in missing_keywords %}{{ keyword }}{% if !loop.last %}, {% endif %}{% endfor %}</p>
    {% else %}
    <p class="verdict-ready">{{ perfect_message }}</p>
    {% endif %}
    {% if detailed %}
    <h3>Matched Keywords:</h3>
    <p>{% for keyword in matched_keywords %}{{ keyword }}{% if !loop.last %}, {% endif %}{% endfor %}</p>
    {% endif %}
    <hr>
    <h3 class="{{ verdict_class }}">{{ headline }}</h3>
    <p>{{ advice }}</p>
    <div class="metadata">
        <p>Job: {{ job_source }} ({{ job_keyword_count }} keywords) | Resume: {{ resume_source }} ({{ resume_keyword_count }} keywords)</p>
        <p>Stopwords: {{ stopword_source }} | Generated: {{ generated_at }} | v{{ version }}</p>
    </div>
</body>
</html>"#,
    ext = "html"
)]
struct HtmlTemplate<'a> {
    include_styles: bool,
    detailed: bool,
    score_display: &'a str,
    has_missing: bool,
    missing_keywords: &'a [String],
    matched_keywords: &'a [String],
    perfect_message: &'a str,
    verdict_class: &'a str,
    headline: &'a str,
    advice: &'a str,
    job_source: &'a str,
    resume_source: &'a str,
    job_keyword_count: usize,
    resume_keyword_count: usize,
    stopword_source: &'a str,
    generated_at: String,
    version: &'a str,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score {
            s if s >= 90.0 => ("EXCELLENT", Color::Green),
            s if s >= 80.0 => ("VERY GOOD", Color::BrightGreen),
            s if s >= 70.0 => ("GOOD", Color::Yellow),
            s if s >= 60.0 => ("FAIR", Color::BrightYellow),
            s if s >= 50.0 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        output.push_str(&self.format_header("THE LAZY ATS CHECKER", 1));
        output.push_str(&format!(
            "Match Score: {}% {}\n",
            summary.score_display,
            self.format_score_badge(summary.score)
        ));

        if report.missing_keywords.is_empty() {
            let message = if report.is_perfect_match() {
                PERFECT_MATCH
            } else {
                "No keywords found in the job description."
            };
            output.push_str(&format!("\n{}\n", self.colorize(message, Color::Green)));
        } else {
            output.push_str(&self.format_header("Missing Keywords:", 2));
            output.push_str(&format!(
                "{}\n",
                self.colorize(&report.missing_keywords.join(", "), Color::BrightRed)
            ));
        }

        if self.detailed {
            output.push_str(&self.format_header("Matched Keywords:", 2));
            if report.matched_keywords.is_empty() {
                output.push_str("(none)\n");
            } else {
                output.push_str(&format!("{}\n", report.matched_keywords.join(", ")));
            }

            output.push_str(&self.format_header("Details", 3));
            output.push_str(&format!(
                "  • Job keywords: {} ({})\n",
                summary.job_keyword_count, report.metadata.job_source
            ));
            output.push_str(&format!(
                "  • Resume keywords: {} ({})\n",
                summary.resume_keyword_count, report.metadata.resume_source
            ));
            output.push_str(&format!(
                "  • Matched: {} of {}\n",
                summary.matched_keyword_count, summary.job_keyword_count
            ));
            output.push_str(&format!(
                "  • Stopwords: {} ({} words)\n",
                report.metadata.stopword_source, report.metadata.stopword_count
            ));
            output.push_str(&format!(
                "  • Generated: {} | Processing time: {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
        }

        let verdict_color = match summary.verdict {
            Verdict::Ready => Color::Green,
            Verdict::AtRisk => Color::Red,
        };
        output.push_str(&self.format_header(summary.verdict.headline(), 2));
        output.push_str(&format!(
            "{}\n",
            self.colorize(summary.verdict.advice(), verdict_color)
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        output.push_str("# The Lazy ATS Checker\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Job:** `{}` | **Resume:** `{}`\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                display_name(&report.metadata.job_source),
                display_name(&report.metadata.resume_source)
            ));
        }

        output.push_str(&format!("## Match Score: {}%\n\n", summary.score_display));
        output.push_str("| Job keywords | Resume keywords | Matched |\n");
        output.push_str("|--------------|-----------------|---------|\n");
        output.push_str(&format!(
            "| {} | {} | {} |\n\n",
            summary.job_keyword_count, summary.resume_keyword_count, summary.matched_keyword_count
        ));

        if report.missing_keywords.is_empty() {
            if report.is_perfect_match() {
                output.push_str(&format!("{}\n\n", PERFECT_MATCH));
            }
        } else {
            output.push_str("### Missing Keywords\n\n");
            let quoted: Vec<String> = report
                .missing_keywords
                .iter()
                .map(|k| format!("`{}`", k))
                .collect();
            output.push_str(&format!("{}\n\n", quoted.join(", ")));
        }

        output.push_str(&format!("### {}\n\n", summary.verdict.headline()));
        output.push_str(&format!("{}\n", summary.verdict.advice()));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool, detailed: bool) -> Self {
        Self {
            include_styles,
            detailed,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let verdict_class = match report.summary.verdict {
            Verdict::Ready => "verdict-ready",
            Verdict::AtRisk => "verdict-atrisk",
        };

        let template = HtmlTemplate {
            include_styles: self.include_styles,
            detailed: self.detailed,
            score_display: &report.summary.score_display,
            has_missing: !report.missing_keywords.is_empty(),
            missing_keywords: &report.missing_keywords,
            matched_keywords: &report.matched_keywords,
            perfect_message: if report.is_perfect_match() {
                PERFECT_MATCH
            } else {
                "No keywords found in the job description."
            },
            verdict_class,
            headline: report.summary.verdict.headline(),
            advice: report.summary.verdict.advice(),
            job_source: &report.metadata.job_source,
            resume_source: &report.metadata.resume_source,
            job_keyword_count: report.summary.job_keyword_count,
            resume_keyword_count: report.summary.resume_keyword_count,
            stopword_source: &report.metadata.stopword_source,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            version: &report.metadata.version,
        };

        template
            .render()
            .map_err(|e| LazyAtsError::OutputFormatting(format!("HTML template error: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true, false),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true, detailed),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn display_name(source: &str) -> String {
    Path::new(source)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| source.to_string())
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|stem| !stem.is_empty() && !stem.starts_with('<'))
        .unwrap_or_else(|| "resume".to_string());

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_ats_check{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::tests::sample_report;

    #[test]
    fn test_console_plain() {
        let report = sample_report("python sql aws", "python aws");
        let output = ConsoleFormatter::new(false, false)
            .format_report(&report)
            .unwrap();

        assert!(output.contains("Match Score: 66.7% [FAIR]"));
        assert!(output.contains("Missing Keywords:"));
        assert!(output.contains("sql"));
        assert!(output.contains("WARNING: Low Match Score"));
        assert!(!output.contains("Matched Keywords:"));
    }

    #[test]
    fn test_console_perfect_match() {
        let report = sample_report("rust tokio", "tokio and rust");
        let output = ConsoleFormatter::new(false, true)
            .format_report(&report)
            .unwrap();

        assert!(output.contains("Match Score: 100.0% [EXCELLENT]"));
        assert!(output.contains(PERFECT_MATCH));
        assert!(output.contains("Matched Keywords:"));
        assert!(output.contains("Great job!"));
    }

    #[test]
    fn test_json_output() {
        let report = sample_report("python sql aws", "python aws");
        let json = JsonFormatter::new(false).format_report(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["missing_keywords"], serde_json::json!(["sql"]));
        assert_eq!(value["summary"]["verdict"], "AtRisk");
        assert_eq!(value["summary"]["score_display"], "66.7");
    }

    #[test]
    fn test_markdown_output() {
        let report = sample_report("kafka rust", "rust");
        let markdown = MarkdownFormatter::new(true).format_report(&report).unwrap();

        assert!(markdown.contains("## Match Score: 50.0%"));
        assert!(markdown.contains("`kafka`"));
        assert!(markdown.contains("`job.txt`"));
    }

    #[test]
    fn test_html_output() {
        // Punctuation is stripped before the keyword ever reaches the template
        let report = sample_report("<script>alert</script> rust", "rust");
        let html = HtmlFormatter::new(false, false).format_report(&report).unwrap();

        assert!(html.contains("Match Score: 50.0%"));
        assert!(html.contains("scriptalertscript"));
        assert!(html.contains("verdict-atrisk"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_generator_dispatch() {
        let report = sample_report("rust", "rust");
        let generator = ReportGenerator::with_options(false, false, true);

        let html = generator.generate_report(&report, &OutputFormat::Html).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        let console = generator.generate_report(&report, &OutputFormat::Console).unwrap();
        assert!(console.contains("THE LAZY ATS CHECKER"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(&OutputFormat::Json, "cv/jane_doe.pdf", false),
            "jane_doe_ats_check.json"
        );
        assert_eq!(
            suggest_filename(&OutputFormat::Html, "<inline text>", false),
            "resume_ats_check.html"
        );
    }
}
