//! CLI interface for the resume checker

use crate::config::OutputFormat;
use crate::input::file_detector::MediaType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-checker")]
#[command(about = "Heuristic resume checker for PDF and Word resumes")]
#[command(long_about = "Detect the role a resume targets and score it for ATS keyword coverage, structure and formatting, with concrete improvement suggestions")]
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
    /// Analyze one or more resumes
    Analyze {
        /// Resume files (PDF, DOCX)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Declared media type, overriding detection from the file extension
        #[arg(short, long)]
        media_type: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save the report to this file (or directory, when analyzing several files)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include keyword details in console output
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show the role reference table
    Roles {
        /// Only show this role, e.g. DATA_SCIENTIST
        role: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Parse a declared media type given on the command line
pub fn parse_media_type(media_type: &str) -> Result<MediaType, String> {
    match MediaType::from_mime(media_type) {
        MediaType::Unknown => Err(format!(
            "Unsupported media type: {}. Supported: {}, {}",
            media_type,
            MediaType::Pdf.as_mime(),
            MediaType::Docx.as_mime()
        )),
        supported => Ok(supported),
    }
}
