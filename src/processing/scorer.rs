//! Overall, ATS and format scoring

use crate::processing::roles::{Role, RoleTable};
use crate::processing::sections::{FormatIssue, SectionPresence};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const OVERALL_BASE: i32 = 40;
const MAJOR_SECTION_BONUS: i32 = 10;
const PROJECT_BONUS: i32 = 5;
const LONG_CONTENT_THRESHOLD: usize = 1000;
const LONG_CONTENT_BONUS: i32 = 5;
const SHORT_CONTENT_THRESHOLD: usize = 500;
const SHORT_CONTENT_PENALTY: i32 = 10;
const MIN_SECTIONS: usize = 3;
const FEW_SECTIONS_PENALTY: i32 = 10;
const SKILL_BONUS_PER_MATCH: i32 = 2;
const SKILL_BONUS_CAP: i32 = 15;

const ATS_BASE: i32 = 50;
const ATS_MATCHED_SKILL: i32 = 3;
const ATS_MISSING_SKILL: i32 = 2;
const ATS_FORMAT_ISSUE: i32 = 3;
const ATS_MISSING_KEYWORD: i32 = 1;
const ATS_FEW_SUGGESTIONS_THRESHOLD: usize = 3;
const ATS_FEW_SUGGESTIONS_BONUS: i32 = 5;

const FORMAT_BASE: i32 = 80;
const FORMAT_ISSUE_PENALTY: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub overall: u8,
    pub ats: u8,
    pub format: u8,
}

/// Everything the ATS score depends on, gathered by the orchestrator
#[derive(Debug, Clone, Copy)]
pub struct AtsInputs<'a> {
    pub role: Role,
    pub extracted_keywords: &'a [String],
    pub format_issues: &'a [FormatIssue],
    pub missing_keywords: usize,
    pub suggestions: usize,
}

pub fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

pub struct Scorer {
    roles: Arc<RoleTable>,
}

impl Scorer {
    pub fn new(roles: Arc<RoleTable>) -> Self {
        Self { roles }
    }

    /// Number of the role's skills present in the (lower-cased) text
    pub fn matched_skill_count(&self, role: Role, lower_text: &str) -> usize {
        self.roles
            .entry(role)
            .map(|entry| entry.skill_matcher.count(lower_text))
            .unwrap_or(0)
    }

    pub fn overall(&self, role: Role, lower_text: &str, sections: &SectionPresence, length: usize) -> u8 {
        let mut score = OVERALL_BASE;

        for present in [sections.summary, sections.experience, sections.education, sections.skills] {
            if present {
                score += MAJOR_SECTION_BONUS;
            }
        }
        if sections.project {
            score += PROJECT_BONUS;
        }

        if length > LONG_CONTENT_THRESHOLD {
            score += LONG_CONTENT_BONUS;
        }
        if length < SHORT_CONTENT_THRESHOLD {
            score -= SHORT_CONTENT_PENALTY;
        }
        if sections.count() < MIN_SECTIONS {
            score -= FEW_SECTIONS_PENALTY;
        }

        let matched = self.matched_skill_count(role, lower_text) as i32;
        score += (matched * SKILL_BONUS_PER_MATCH).min(SKILL_BONUS_CAP);

        clamp_score(score)
    }

    /// ATS score.
    ///
    /// Skills are checked for membership in the extracted keyword list rather
    /// than in the text, so a role skill outside the technical vocabulary
    /// (e.g. "pandas") always counts as unmatched here even when the text
    /// mentions it.
    pub fn ats(&self, inputs: &AtsInputs<'_>) -> u8 {
        let mut score = ATS_BASE;

        for skill in self.roles.skills(inputs.role) {
            let skill = skill.to_lowercase();
            if inputs.extracted_keywords.iter().any(|k| *k == skill) {
                score += ATS_MATCHED_SKILL;
            } else {
                score -= ATS_MISSING_SKILL;
            }
        }

        score -= inputs.format_issues.len() as i32 * ATS_FORMAT_ISSUE;
        score -= inputs.missing_keywords as i32 * ATS_MISSING_KEYWORD;
        if inputs.suggestions < ATS_FEW_SUGGESTIONS_THRESHOLD {
            score += ATS_FEW_SUGGESTIONS_BONUS;
        }

        clamp_score(score)
    }

    pub fn format(&self, format_issues: &[FormatIssue]) -> u8 {
        clamp_score(FORMAT_BASE - format_issues.len() as i32 * FORMAT_ISSUE_PENALTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> Scorer {
        Scorer::new(Arc::new(RoleTable::new().unwrap()))
    }

    #[test]
    fn test_overall_empty_text() {
        let sections = SectionPresence::detect("");
        // 40 base, -10 short, -10 fewer than three sections
        assert_eq!(scorer().overall(Role::General, "", &sections, 0), 20);
    }

    #[test]
    fn test_overall_all_sections_and_skill_cap() {
        let text = "summary experience education skills project java python javascript c++ c# sql spring react";
        let sections = SectionPresence::detect(text);
        // 40 + 40 + 5 + 15 (capped skill bonus), length 1200 adds 5 -> 105 clamps to 100
        assert_eq!(scorer().overall(Role::SoftwareDeveloper, text, &sections, 1200), 100);
        // Mid-length text: 40 + 45 + 15 = 100
        assert_eq!(scorer().overall(Role::SoftwareDeveloper, text, &sections, 700), 100);
    }

    #[test]
    fn test_overall_skill_bonus() {
        let text = "experience education skills docker";
        let sections = SectionPresence::detect(text);
        // 40 + 30 + 2
        assert_eq!(scorer().overall(Role::DevopsEngineer, text, &sections, 600), 72);
    }

    #[test]
    fn test_ats_uses_extracted_keywords() {
        let extracted = vec!["python".to_string(), "sql".to_string()];
        let inputs = AtsInputs {
            role: Role::DataScientist,
            extracted_keywords: &extracted,
            format_issues: &[],
            missing_keywords: 0,
            suggestions: 0,
        };
        // python and sql matched (+6), the other 8 skills unmatched (-16), +5 bonus
        assert_eq!(scorer().ats(&inputs), 45);
    }

    #[test]
    fn test_ats_penalties_and_clamp() {
        let inputs = AtsInputs {
            role: Role::SoftwareDeveloper,
            extracted_keywords: &[],
            format_issues: &[FormatIssue::TooShort, FormatIssue::NoLineBreaks],
            missing_keywords: 12,
            suggestions: 15,
        };
        // 50 - 24 - 6 - 12 = 8
        assert_eq!(scorer().ats(&inputs), 8);

        let general = AtsInputs {
            role: Role::General,
            extracted_keywords: &[],
            format_issues: &[],
            missing_keywords: 0,
            suggestions: 1,
        };
        assert_eq!(scorer().ats(&general), 55);
    }

    #[test]
    fn test_format_score() {
        let s = scorer();
        assert_eq!(s.format(&[]), 80);
        assert_eq!(s.format(&[FormatIssue::TooLong, FormatIssue::MultipleSpaces]), 70);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp_score(-20), 0);
        assert_eq!(clamp_score(130), 100);
        assert_eq!(clamp_score(64), 64);
    }
}
