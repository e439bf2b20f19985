//! Text extraction from PDF and Word documents

use crate::error::{Result, ResumeCheckerError};
use crate::input::file_detector::MediaType;
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};

/// Plain text of an uploaded document with the media type it was declared as
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub content: String,
    pub media_type: MediaType,
}

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics instead of erroring on some malformed fonts and streams
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));

        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ResumeCheckerError::PdfExtraction(format!(
                "Failed to extract text from PDF: {}",
                e
            ))),
            Err(_) => Err(ResumeCheckerError::PdfExtraction(
                "PDF parser aborted on malformed content".to_string(),
            )),
        }
    }
}

pub struct DocxExtractor;

impl DocxExtractor {
    fn push_paragraph(paragraph: &Paragraph, text: &mut String) {
        Self::push_paragraph_children(&paragraph.children, text);
        text.push('\n');
    }

    fn push_paragraph_children(children: &[ParagraphChild], text: &mut String) {
        for child in children {
            match child {
                ParagraphChild::Run(run) => Self::push_run(run, text),
                ParagraphChild::Hyperlink(link) => Self::push_paragraph_children(&link.children, text),
                _ => {}
            }
        }
    }

    fn push_run(run: &Run, text: &mut String) {
        for child in &run.children {
            match child {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Tab(_) => text.push('\t'),
                RunChild::Break(_) => text.push('\n'),
                _ => {}
            }
        }
    }

    /// Cell paragraphs in row order, nested tables included
    #[allow(irrefutable_let_patterns)]
    fn push_table(table: &Table, text: &mut String) {
        for row in &table.rows {
            let TableChild::TableRow(row) = row else { continue };
            for cell in &row.cells {
                let TableRowChild::TableCell(cell) = cell else { continue };
                for content in &cell.children {
                    match content {
                        TableCellContent::Paragraph(paragraph) => Self::push_paragraph(paragraph, text),
                        TableCellContent::Table(nested) => Self::push_table(nested, text),
                        _ => {}
                    }
                }
            }
        }
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| {
            ResumeCheckerError::DocxExtraction(format!("Failed to read Word document: {}", e))
        })?;

        let mut text = String::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => Self::push_paragraph(paragraph, &mut text),
                DocumentChild::Table(table) => Self::push_table(table, &mut text),
                _ => {}
            }
        }

        Ok(text)
    }
}

/// Extract plain text from `bytes` declared as `declared_media_type`.
///
/// Only PDF and Word OOXML are supported; anything else fails with
/// `UnsupportedFormat` before any parsing is attempted.
pub fn extract_text(bytes: &[u8], declared_media_type: &str) -> Result<String> {
    match MediaType::from_mime(declared_media_type) {
        MediaType::Unknown => Err(ResumeCheckerError::UnsupportedFormat(format!(
            "Unsupported media type: {}",
            declared_media_type
        ))),
        media_type => extract_document(bytes, media_type).map(|doc| doc.content),
    }
}

pub fn extract_document(bytes: &[u8], media_type: MediaType) -> Result<ExtractedDocument> {
    let content = match media_type {
        MediaType::Pdf => PdfExtractor.extract(bytes)?,
        MediaType::Docx => DocxExtractor.extract(bytes)?,
        MediaType::Unknown => {
            return Err(ResumeCheckerError::UnsupportedFormat(
                "Unsupported media type: unknown".to_string(),
            ));
        }
    };

    debug!("Extracted {} characters from {} document", content.chars().count(), media_type);

    Ok(ExtractedDocument { content, media_type })
}
