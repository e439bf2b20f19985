//! Strengths, weaknesses, keyword gaps and suggestions

use crate::processing::roles::{Role, RoleTable};
use crate::processing::sections::SectionPresence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggested_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

pub struct InsightGenerator {
    roles: Arc<RoleTable>,
}

impl InsightGenerator {
    pub fn new(roles: Arc<RoleTable>) -> Self {
        Self { roles }
    }

    /// Derive every insight list for `role` from lower-cased text
    pub fn generate(&self, role: Role, lower_text: &str, sections: &SectionPresence) -> Insights {
        let (present, missing): (Vec<String>, Vec<String>) = match self.roles.entry(role) {
            Some(entry) => {
                let (present, missing) = entry.skill_matcher.partition(lower_text);
                (
                    present.into_iter().map(str::to_string).collect(),
                    missing.into_iter().map(str::to_string).collect(),
                )
            }
            None => (Vec::new(), Vec::new()),
        };

        let strengths = Self::strengths(&present, sections);
        let weaknesses = Self::weaknesses(&missing, sections);
        let suggestions = Self::suggestions(&missing, lower_text);
        let suggested_keywords = self.roles.skills(role).to_vec();

        Insights {
            strengths,
            weaknesses,
            missing_keywords: missing,
            suggested_keywords,
            suggestions,
        }
    }

    fn strengths(present_skills: &[String], sections: &SectionPresence) -> Vec<String> {
        let mut strengths: Vec<String> = present_skills
            .iter()
            .map(|skill| format!("Strong {} skills", skill))
            .collect();

        if sections.experience {
            strengths.push("Includes relevant work experience".to_string());
        }
        if sections.education {
            strengths.push("Includes educational background".to_string());
        }
        if sections.project {
            strengths.push("Includes project experience".to_string());
        }

        strengths
    }

    fn weaknesses(missing_skills: &[String], sections: &SectionPresence) -> Vec<String> {
        let mut weaknesses: Vec<String> = missing_skills
            .iter()
            .map(|skill| format!("Missing {} skills", skill))
            .collect();

        if !sections.experience {
            weaknesses.push("No work experience mentioned".to_string());
        }
        if !sections.education {
            weaknesses.push("No educational background mentioned".to_string());
        }
        if !sections.project {
            weaknesses.push("No project experience mentioned".to_string());
        }

        weaknesses
    }

    fn suggestions(missing_keywords: &[String], lower_text: &str) -> Vec<String> {
        let mut suggestions: Vec<String> = missing_keywords
            .iter()
            .map(|keyword| format!("Consider adding {} to your resume", keyword))
            .collect();

        if !lower_text.contains("summary") {
            suggestions.push("Add a professional summary section".to_string());
        }
        if !lower_text.contains("achievement") {
            suggestions.push("Include specific achievements and metrics".to_string());
        }
        if !lower_text.contains("certification") {
            suggestions.push("Add relevant certifications if any".to_string());
        }

        suggestions
    }
}
