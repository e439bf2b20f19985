//! Section presence and surface formatting checks

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_LENGTH: usize = 500;
pub const MAX_LENGTH: usize = 2000;

/// Which standard resume sections are mentioned anywhere in the text.
///
/// Detection is a plain substring test on lower-cased text, so a sentence such
/// as "my education includes" counts as an education section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub project: bool,
}

impl SectionPresence {
    pub fn detect(lower_text: &str) -> Self {
        Self {
            summary: lower_text.contains("summary"),
            experience: lower_text.contains("experience"),
            education: lower_text.contains("education"),
            skills: lower_text.contains("skills"),
            project: lower_text.contains("project"),
        }
    }

    pub fn count(&self) -> usize {
        [self.summary, self.experience, self.education, self.skills, self.project]
            .iter()
            .filter(|&&present| present)
            .count()
    }

    /// Names of the sections that were not found
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("Summary", self.summary),
            ("Experience", self.experience),
            ("Education", self.education),
            ("Skills", self.skills),
            ("Projects", self.project),
        ]
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatIssue {
    TooShort,
    TooLong,
    NoLineBreaks,
    MultipleSpaces,
}

impl FormatIssue {
    pub fn message(&self) -> &'static str {
        match self {
            FormatIssue::TooShort => "Resume content is too short",
            FormatIssue::TooLong => "Resume content is too long",
            FormatIssue::NoLineBreaks => "Poor formatting - no line breaks",
            FormatIssue::MultipleSpaces => "Multiple spaces detected - check formatting",
        }
    }
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Length of the text in characters, the unit every length rule is expressed in.
/// Characters outside the Basic Multilingual Plane count once.
pub fn content_length(text: &str) -> usize {
    text.chars().count()
}

/// Formatting defects of the original (not lower-cased) text, in a fixed order
pub fn check_format(text: &str) -> Vec<FormatIssue> {
    let length = content_length(text);
    let mut issues = Vec::new();

    if length < MIN_LENGTH {
        issues.push(FormatIssue::TooShort);
    }
    if length > MAX_LENGTH {
        issues.push(FormatIssue::TooLong);
    }
    if !text.contains('\n') {
        issues.push(FormatIssue::NoLineBreaks);
    }
    if text.contains("  ") {
        issues.push(FormatIssue::MultipleSpaces);
    }

    issues
}
