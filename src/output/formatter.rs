//! Output formatters for resume records

use crate::config::OutputFormat;
use crate::error::{Result, ResumeCheckerError};
use crate::output::report::{ResumeRecord, ScoreBand};
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_record(&self, record: &ResumeRecord) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

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

pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
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
            _ => "▒",
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

    fn format_score(&self, name: &str, score: u8) -> String {
        let band = ScoreBand::from_score(score);
        let color = match band {
            ScoreBand::Good => Color::Green,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Poor => Color::Red,
        };

        let badge = if self.use_colors {
            format!("[{}]", band.label().color(color).bold())
        } else {
            format!("[{}]", band.label())
        };

        format!("{:<14} {:>3}/100 {}\n", name, score, badge)
    }

    fn format_list(&self, title: &str, items: &[String], bullet: &str, color: Color) -> String {
        if items.is_empty() {
            return String::new();
        }

        let mut output = self.format_header(title, 3);
        for item in items {
            output.push_str(&format!("  {} {}\n", bullet, self.colorize(item, color)));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_record(&self, record: &ResumeRecord) -> Result<String> {
        let analysis = &record.analysis;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "File: {} ({}) | Analysed: {}\n",
            record.file_name,
            record.media_type,
            record.uploaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&format!(
            "Detected role: {}\n",
            self.colorize(record.role.label(), Color::Cyan)
        ));

        output.push_str(&self.format_header("Scores", 2));
        output.push_str(&self.format_score("Overall", analysis.overall_score));
        output.push_str(&self.format_score("ATS", record.ats_score));
        output.push_str(&self.format_score("Format", record.format_score));

        output.push_str(&self.format_list("Strengths", &analysis.strengths, "✓", Color::Green));
        output.push_str(&self.format_list("Weaknesses", &analysis.weaknesses, "✗", Color::Red));
        output.push_str(&self.format_list("Format Issues", &analysis.format_issues, "!", Color::Yellow));
        output.push_str(&self.format_list("Suggestions", &analysis.suggestions, "→", Color::White));

        if self.detailed {
            output.push_str(&self.format_header("Keyword Details", 2));
            let join = |items: &[String]| {
                if items.is_empty() {
                    "-".to_string()
                } else {
                    items.join(", ")
                }
            };
            output.push_str(&format!("Keywords found:     {}\n", join(&analysis.extracted_keywords)));
            output.push_str(&format!("Missing keywords:   {}\n", join(&analysis.missing_keywords)));
            output.push_str(&format!("Suggested keywords: {}\n", join(&analysis.suggested_keywords)));
        }

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
    fn format_record(&self, record: &ResumeRecord) -> Result<String> {
        let response = record.response();
        if self.pretty {
            Ok(serde_json::to_string_pretty(&response)?)
        } else {
            Ok(serde_json::to_string(&response)?)
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

    fn markdown_list(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("## {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }

    fn keyword_line(items: &[String]) -> String {
        if items.is_empty() {
            "_none_".to_string()
        } else {
            items.iter().map(|k| format!("`{}`", k)).collect::<Vec<_>>().join(", ")
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_record(&self, record: &ResumeRecord) -> Result<String> {
        let analysis = &record.analysis;
        let mut output = String::new();

        output.push_str(&format!("# Resume Analysis: {}\n\n", record.file_name));

        if self.include_metadata {
            output.push_str(&format!(
                "**Analysed:** {} | **Type:** `{}`\n\n",
                record.uploaded_at.format("%Y-%m-%d %H:%M:%S UTC"),
                record.media_type
            ));
        }

        output.push_str(&format!("**Detected role:** {}\n\n", record.role.label()));

        output.push_str("| Score | Value | Rating |\n");
        output.push_str("|-------|-------|--------|\n");
        for (name, score) in [
            ("Overall", analysis.overall_score),
            ("ATS", record.ats_score),
            ("Format", record.format_score),
        ] {
            output.push_str(&format!(
                "| {} | {}/100 | {} |\n",
                name,
                score,
                ScoreBand::from_score(score).label()
            ));
        }
        output.push('\n');

        Self::markdown_list(&mut output, "Strengths", &analysis.strengths);
        Self::markdown_list(&mut output, "Weaknesses", &analysis.weaknesses);
        Self::markdown_list(&mut output, "Format Issues", &analysis.format_issues);
        Self::markdown_list(&mut output, "Suggestions", &analysis.suggestions);

        output.push_str("## Keywords\n\n");
        output.push_str(&format!("- **Found:** {}\n", Self::keyword_line(&analysis.extracted_keywords)));
        output.push_str(&format!("- **Missing:** {}\n", Self::keyword_line(&analysis.missing_keywords)));
        output.push_str(&format!("- **Suggested:** {}\n", Self::keyword_line(&analysis.suggested_keywords)));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, record: &ResumeRecord, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_record(record),
            OutputFormat::Json => self.json_formatter.format_record(record),
            OutputFormat::Markdown => self.markdown_formatter.format_record(record),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content).map_err(|e| {
        ResumeCheckerError::OutputFormatting(format!(
            "Failed to write report to {}: {}",
            file_path.display(),
            e
        ))
    })
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
    }
}
