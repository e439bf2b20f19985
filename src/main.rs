//! Resume checker: role detection, ATS and format scoring for PDF and Word resumes

use clap::Parser;
use log::{debug, error, info, warn};
use resume_checker::cli::{self, Cli, Commands, ConfigAction};
use resume_checker::config::{Config, OutputFormat};
use resume_checker::error::{Result, ResumeCheckerError};
use resume_checker::input::{InputManager, MediaType};
use resume_checker::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_checker::output::ResumeRecord;
use resume_checker::processing::{ResumeAnalyzer, Role, RoleTable};
use std::path::{Path, PathBuf};
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

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            files,
            media_type,
            output,
            save,
            detailed,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeCheckerError::InvalidInput)?,
                None => config.output.format,
            };
            let declared = media_type
                .as_deref()
                .map(cli::parse_media_type)
                .transpose()
                .map_err(ResumeCheckerError::InvalidInput)?;

            analyze_files(&files, declared, output_format, save.as_deref(), detailed, &config).await
        }

        Commands::Roles { role } => {
            let table = config.role_table()?;
            match role {
                Some(name) => {
                    let role: Role = name.parse()?;
                    print_roles(&table, Some(role));
                }
                None => print_roles(&table, None),
            }
            Ok(())
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    println!("# {}", path.display());
                    println!("{}", config.to_toml()?);
                }
                ConfigAction::Reset => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset to defaults: {}", path.display());
                }
                ConfigAction::Path => println!("{}", path.display()),
            }
            Ok(())
        }
    }
}

async fn analyze_files(
    files: &[PathBuf],
    declared: Option<MediaType>,
    output_format: OutputFormat,
    save: Option<&Path>,
    detailed: bool,
    config: &Config,
) -> Result<()> {
    let roles = Arc::new(config.role_table()?);
    let analyzer = ResumeAnalyzer::new(roles)?;
    let mut input_manager = InputManager::from_config(&config.input);
    let generator = ReportGenerator::with_options(
        config.output.color_output && save.is_none(),
        detailed || config.output.detailed,
        true,
        true,
    );

    info!("Analyzing {} file(s)", files.len());
    let mut failed = 0usize;

    for path in files {
        let upload = match input_manager.load(path, declared).await {
            Ok(upload) => upload,
            Err(e) => {
                if e.is_extraction_failure() {
                    error!("Could not process file {}: {}", path.display(), e);
                } else {
                    error!("Skipping {}: {}", path.display(), e);
                }
                failed += 1;
                continue;
            }
        };

        if upload.text.trim().is_empty() {
            warn!("No text could be extracted from {}; scores will be minimal", path.display());
        }

        let assessment = analyzer.assess(&upload.text);
        debug!("Sections not found in {}: {:?}", upload.file_name, assessment.sections.missing());
        let record = ResumeRecord::new(upload, assessment);

        let destination = save.map(|target| {
            if files.len() > 1 {
                target.join(suggest_filename(&output_format, &record.file_name, false))
            } else {
                target.to_path_buf()
            }
        });
        if let Err(e) = emit_report(&generator, &record, &output_format, destination.as_deref()) {
            error!("Could not write report for {}: {}", record.file_name, e);
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(ResumeCheckerError::InvalidInput(format!(
            "{} of {} file(s) could not be processed",
            failed,
            files.len()
        )));
    }

    Ok(())
}

fn emit_report(
    generator: &ReportGenerator,
    record: &ResumeRecord,
    output_format: &OutputFormat,
    destination: Option<&Path>,
) -> Result<()> {
    let report = generator.generate_report(record, output_format)?;
    match destination {
        Some(destination) => {
            save_report_to_file(&report, destination)?;
            println!("Saved report for {} to {}", record.file_name, destination.display());
        }
        None => println!("{}", report),
    }
    Ok(())
}

fn print_roles(table: &RoleTable, only: Option<Role>) {
    if let Some(role) = only {
        if table.profile(role).is_none() {
            println!("{} has no profile; resumes detected as {} are scored without role skills", role, role);
            return;
        }
    }

    for profile in table.entries().iter().map(|e| &e.profile) {
        if only.map_or(false, |r| r != profile.role) {
            continue;
        }
        println!("{} ({})", profile.role, profile.role.label());
        println!("  Keywords: {}", profile.keywords.join(", "));
        println!("  Skills:   {}", profile.skills.join(", "));
        println!();
    }
}
