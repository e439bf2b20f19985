//! Error handling for the resume checker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeCheckerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Word document extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeCheckerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeCheckerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeCheckerError::Processing(err.to_string())
    }
}

impl From<aho_corasick::BuildError> for ResumeCheckerError {
    fn from(err: aho_corasick::BuildError) -> Self {
        ResumeCheckerError::Processing(format!("Failed to build phrase matcher: {}", err))
    }
}

impl ResumeCheckerError {
    /// True for failures that come from reading or decoding the uploaded file,
    /// which callers surface as "could not process file".
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            ResumeCheckerError::PdfExtraction(_)
                | ResumeCheckerError::DocxExtraction(_)
                | ResumeCheckerError::UnsupportedFormat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_failures_are_classified() {
        assert!(ResumeCheckerError::UnsupportedFormat("text/csv".into()).is_extraction_failure());
        assert!(ResumeCheckerError::PdfExtraction("bad xref".into()).is_extraction_failure());
        assert!(!ResumeCheckerError::InvalidInput("missing".into()).is_extraction_failure());
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: ResumeCheckerError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, ResumeCheckerError::Processing(ref msg) if msg == "boom"));
    }
}
