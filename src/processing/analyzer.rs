//! Analysis engine combining role detection, keyword extraction, scoring and insights

use crate::error::Result;
use crate::processing::insights::InsightGenerator;
use crate::processing::keywords::KeywordExtractor;
use crate::processing::role_detector::RoleDetector;
use crate::processing::roles::{Role, RoleTable};
use crate::processing::scorer::{AtsInputs, Scorer};
use crate::processing::sections::{self, SectionPresence};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Quality assessment of one resume text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall quality score (0-100)
    pub overall_score: u8,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub format_issues: Vec<String>,
    /// Detected-role skills absent from the text
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    /// Full skill list of the detected role
    #[serde(default)]
    pub suggested_keywords: Vec<String>,
    /// Technical vocabulary terms found in the text
    #[serde(default, rename = "keywords")]
    pub extracted_keywords: Vec<String>,
}

/// Everything derived from one text: role, the two record-level scores and the result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub role: Role,
    pub ats_score: u8,
    pub format_score: u8,
    pub sections: SectionPresence,
    pub analysis: AnalysisResult,
}

/// Stateless analysis engine; cheap to share across threads
pub struct ResumeAnalyzer {
    roles: Arc<RoleTable>,
    detector: RoleDetector,
    keywords: KeywordExtractor,
    scorer: Scorer,
    insights: InsightGenerator,
}

impl ResumeAnalyzer {
    pub fn new(roles: Arc<RoleTable>) -> Result<Self> {
        Ok(Self::with_keywords(roles, KeywordExtractor::new()?))
    }

    pub fn with_keywords(roles: Arc<RoleTable>, keywords: KeywordExtractor) -> Self {
        Self {
            detector: RoleDetector::new(Arc::clone(&roles)),
            scorer: Scorer::new(Arc::clone(&roles)),
            insights: InsightGenerator::new(Arc::clone(&roles)),
            keywords,
            roles,
        }
    }

    pub fn roles(&self) -> &RoleTable {
        &self.roles
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.assess(text).analysis
    }

    /// Run every component over `text`. Never fails, whatever the input.
    pub fn assess(&self, text: &str) -> Assessment {
        let lower = text.to_lowercase();
        let length = sections::content_length(text);

        // Independent passes over the same text
        let role = self.detector.detect(&lower);
        let extracted_keywords = self.keywords.extract(&lower);
        let section_presence = SectionPresence::detect(&lower);
        let format_issues = sections::check_format(text);

        debug!(
            "Detected role {} with {} sections, {} vocabulary terms, {} format issues",
            role,
            section_presence.count(),
            extracted_keywords.len(),
            format_issues.len()
        );

        let insights = self.insights.generate(role, &lower, &section_presence);
        let overall_score = self.scorer.overall(role, &lower, &section_presence, length);
        let ats_score = self.scorer.ats(&AtsInputs {
            role,
            extracted_keywords: &extracted_keywords,
            format_issues: &format_issues,
            missing_keywords: insights.missing_keywords.len(),
            suggestions: insights.suggestions.len(),
        });
        let format_score = self.scorer.format(&format_issues);

        info!(
            "Analysis complete: role={}, overall={}, ats={}, format={}",
            role, overall_score, ats_score, format_score
        );

        Assessment {
            role,
            ats_score,
            format_score,
            sections: section_presence,
            analysis: AnalysisResult {
                overall_score,
                strengths: insights.strengths,
                weaknesses: insights.weaknesses,
                suggestions: insights.suggestions,
                format_issues: format_issues.iter().map(|i| i.message().to_string()).collect(),
                missing_keywords: insights.missing_keywords,
                suggested_keywords: insights.suggested_keywords,
                extracted_keywords,
            },
        }
    }
}
