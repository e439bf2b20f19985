//! Configuration management for the resume checker

use crate::error::{Result, ResumeCheckerError};
use crate::processing::roles::{RoleProfile, RoleTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub enable_caching: bool,
    pub max_file_size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

/// Role reference table, in detection (tie-break) order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub roles: Vec<RoleProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            enable_caching: true,
            max_file_size_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            roles: RoleProfile::defaults(),
        }
    }
}

impl Config {
    /// Load from `path` (or the default location), writing defaults if the file is missing
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = Self::from_toml(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ResumeCheckerError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ResumeCheckerError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(config_path, self.to_toml()?)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-checker")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.max_file_size_bytes == 0 {
            return Err(ResumeCheckerError::Configuration(
                "input.max_file_size_bytes must be greater than zero".to_string(),
            ));
        }
        RoleTable::validate_profiles(&self.analysis.roles)
    }

    /// Build the shared role table described by this configuration
    pub fn role_table(&self) -> Result<RoleTable> {
        RoleTable::from_profiles(self.analysis.roles.clone())
    }
}
