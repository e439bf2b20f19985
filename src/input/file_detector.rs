//! Media type detection

use serde::{Deserialize, Serialize};
use std::fmt;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Pdf,
    Docx,
    Unknown,
}

impl MediaType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => MediaType::Pdf,
            "docx" => MediaType::Docx,
            _ => MediaType::Unknown,
        }
    }

    /// Parse a declared media type, ignoring parameters such as `; charset=...`
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or_default().trim().to_lowercase();
        match essence.as_str() {
            PDF_MIME => MediaType::Pdf,
            DOCX_MIME => MediaType::Docx,
            _ => MediaType::Unknown,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            MediaType::Pdf => PDF_MIME,
            MediaType::Docx => DOCX_MIME,
            MediaType::Unknown => "application/octet-stream",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, MediaType::Unknown)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}
