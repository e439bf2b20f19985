//! Resume records and their serialized response shape

use crate::input::file_detector::MediaType;
use crate::input::manager::UploadedFile;
use crate::processing::analyzer::{AnalysisResult, Assessment};
use crate::processing::roles::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An analysed upload: file metadata, record-level scores and the owned analysis
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeRecord {
    pub file_name: String,
    pub media_type: MediaType,
    pub file_data: Vec<u8>,
    pub uploaded_at: DateTime<Utc>,
    pub role: Role,
    pub ats_score: u8,
    pub format_score: u8,
    pub keywords: Vec<String>,
    pub analysis: AnalysisResult,
}

impl ResumeRecord {
    pub fn new(upload: UploadedFile, assessment: Assessment) -> Self {
        Self::with_timestamp(upload, assessment, Utc::now())
    }

    pub fn with_timestamp(upload: UploadedFile, assessment: Assessment, uploaded_at: DateTime<Utc>) -> Self {
        Self {
            file_name: upload.file_name,
            media_type: upload.media_type,
            file_data: upload.data,
            uploaded_at,
            role: assessment.role,
            ats_score: assessment.ats_score,
            format_score: assessment.format_score,
            keywords: assessment.analysis.extracted_keywords.clone(),
            analysis: assessment.analysis,
        }
    }

    pub fn response(&self) -> RecordResponse {
        RecordResponse {
            file_name: self.file_name.clone(),
            file_type: self.media_type.as_mime().to_string(),
            upload_date: self.uploaded_at,
            ats_score: self.ats_score,
            format_score: self.format_score,
            keywords: self.keywords.clone(),
            suggested_role: self.role,
            analysis: self.analysis.clone(),
        }
    }
}

/// Response body for one analysed resume; raw file bytes are never included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub file_name: String,
    pub file_type: String,
    pub upload_date: DateTime<Utc>,
    pub ats_score: u8,
    pub format_score: u8,
    pub keywords: Vec<String>,
    pub suggested_role: Role,
    pub analysis: AnalysisResult,
}

/// Coarse rating of a 0-100 score for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Good,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Good => "GOOD",
            ScoreBand::Fair => "FAIR",
            ScoreBand::Poor => "NEEDS WORK",
        }
    }
}
