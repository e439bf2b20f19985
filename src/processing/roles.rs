//! Role reference table: the keyword phrases and skill tokens each role is judged by

use crate::error::{Result, ResumeCheckerError};
use crate::processing::matcher::PhraseMatcher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Professional role a resume can be classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SoftwareDeveloper,
    DataScientist,
    DevopsEngineer,
    /// Fallback when no role matches anything; has no profile
    General,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SoftwareDeveloper => "SOFTWARE_DEVELOPER",
            Role::DataScientist => "DATA_SCIENTIST",
            Role::DevopsEngineer => "DEVOPS_ENGINEER",
            Role::General => "GENERAL",
        }
    }

    /// Human readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Role::SoftwareDeveloper => "Software Developer",
            Role::DataScientist => "Data Scientist",
            Role::DevopsEngineer => "DevOps Engineer",
            Role::General => "General",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ResumeCheckerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "SOFTWARE_DEVELOPER" => Ok(Role::SoftwareDeveloper),
            "DATA_SCIENTIST" => Ok(Role::DataScientist),
            "DEVOPS_ENGINEER" => Ok(Role::DevopsEngineer),
            "GENERAL" => Ok(Role::General),
            _ => Err(ResumeCheckerError::InvalidInput(format!(
                "Unknown role: {}. Known roles: SOFTWARE_DEVELOPER, DATA_SCIENTIST, DEVOPS_ENGINEER, GENERAL",
                s
            ))),
        }
    }
}

/// Keyword phrases (weighted higher in detection) and skill tokens for one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub role: Role,
    pub keywords: Vec<String>,
    pub skills: Vec<String>,
}

impl RoleProfile {
    pub fn new(role: Role, keywords: &[&str], skills: &[&str]) -> Self {
        Self {
            role,
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The built-in profiles, in detection order
    pub fn defaults() -> Vec<RoleProfile> {
        vec![
            RoleProfile::new(
                Role::SoftwareDeveloper,
                &[
                    "software development", "programming", "coding", "development",
                    "software engineer", "developer", "programmer",
                ],
                &[
                    "java", "python", "javascript", "c++", "c#", "sql",
                    "spring", "react", "angular", "node.js", "git", "agile",
                ],
            ),
            RoleProfile::new(
                Role::DataScientist,
                &[
                    "data science", "machine learning", "artificial intelligence",
                    "data analysis", "statistics", "predictive modeling",
                ],
                &[
                    "python", "r", "tensorflow", "pytorch", "scikit-learn",
                    "pandas", "numpy", "sql", "machine learning", "statistics",
                ],
            ),
            RoleProfile::new(
                Role::DevopsEngineer,
                &[
                    "devops", "continuous integration", "continuous deployment",
                    "infrastructure", "automation", "cloud",
                ],
                &[
                    "docker", "kubernetes", "jenkins", "aws", "azure",
                    "terraform", "ansible", "linux", "ci/cd", "git",
                ],
            ),
        ]
    }
}

/// A profile together with its compiled matchers
#[derive(Debug, Clone)]
pub struct RoleEntry {
    pub profile: RoleProfile,
    pub keyword_matcher: PhraseMatcher,
    pub skill_matcher: PhraseMatcher,
}

/// Ordered, immutable role table; iteration order is detection tie-break order
#[derive(Debug, Clone)]
pub struct RoleTable {
    entries: Vec<RoleEntry>,
}

impl RoleTable {
    /// Table built from the built-in profiles
    pub fn new() -> Result<Self> {
        Self::from_profiles(RoleProfile::defaults())
    }

    pub fn from_profiles(profiles: Vec<RoleProfile>) -> Result<Self> {
        Self::validate_profiles(&profiles)?;

        let mut entries = Vec::with_capacity(profiles.len());
        for profile in profiles {
            let keyword_matcher = PhraseMatcher::new(&profile.keywords)?;
            let skill_matcher = PhraseMatcher::new(&profile.skills)?;
            entries.push(RoleEntry {
                profile,
                keyword_matcher,
                skill_matcher,
            });
        }

        Ok(Self { entries })
    }

    /// Reject tables the detector cannot reason about
    pub fn validate_profiles(profiles: &[RoleProfile]) -> Result<()> {
        for (idx, profile) in profiles.iter().enumerate() {
            if profile.role == Role::General {
                return Err(ResumeCheckerError::Configuration(
                    "GENERAL is the fallback role and cannot have a profile".to_string(),
                ));
            }
            if profiles[..idx].iter().any(|p| p.role == profile.role) {
                return Err(ResumeCheckerError::Configuration(format!(
                    "Duplicate profile for role {}",
                    profile.role
                )));
            }
            if profile.keywords.iter().chain(&profile.skills).any(|s| s.trim().is_empty()) {
                return Err(ResumeCheckerError::Configuration(format!(
                    "Profile for role {} contains an empty keyword or skill",
                    profile.role
                )));
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[RoleEntry] {
        &self.entries
    }

    pub fn entry(&self, role: Role) -> Option<&RoleEntry> {
        self.entries.iter().find(|e| e.profile.role == role)
    }

    pub fn profile(&self, role: Role) -> Option<&RoleProfile> {
        self.entry(role).map(|e| &e.profile)
    }

    /// Skill list for a role; empty for GENERAL or any role without a profile
    pub fn skills(&self, role: Role) -> &[String] {
        self.profile(role).map(|p| p.skills.as_slice()).unwrap_or(&[])
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.entries.iter().map(|e| e.profile.role)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
