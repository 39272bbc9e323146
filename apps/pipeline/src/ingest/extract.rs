//! Document Extractor — converts an uploaded resume into lowercase plain text.
//!
//! Extraction never fails the surrounding flow. Callers get an explicit
//! outcome carrying either the text or the failure, and a failed extraction
//! reads as empty text downstream: zero skills, zero recommendations, upload
//! still accepted.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::errors::PipelineError;
use crate::models::{DocumentFormat, ResumeDocument};

/// Result of a text extraction attempt.
#[derive(Debug)]
pub enum ExtractionOutcome {
    Text(String),
    Failed(PipelineError),
}

impl ExtractionOutcome {
    /// Extracted text, or `""` when extraction failed.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Failed(_) => "",
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Failed(_) => String::new(),
        }
    }

    pub fn failure(&self) -> Option<&PipelineError> {
        match self {
            Self::Text(_) => None,
            Self::Failed(error) => Some(error),
        }
    }
}

/// Extracts lowercase plain text from an uploaded resume.
///
/// Purely local parsing: no shellouts, no network. An unrecognized extension
/// is reported the same way as a corrupt file.
pub fn extract_document(document: &ResumeDocument) -> ExtractionOutcome {
    let format = match document.format() {
        Some(format) => format,
        None => {
            return ExtractionOutcome::Failed(PipelineError::UnsupportedFormat(
                document.file_name.clone(),
            ))
        }
    };

    let result = match format {
        DocumentFormat::Pdf => extract_pdf(&document.bytes),
        DocumentFormat::Docx => extract_docx(&document.bytes),
    };

    match result {
        Ok(text) => ExtractionOutcome::Text(text.to_lowercase()),
        Err(reason) => ExtractionOutcome::Failed(PipelineError::Extraction { format, reason }),
    }
}

/// Page-by-page text concatenation. `pdf-extract` works from memory.
fn extract_pdf(bytes: &[u8]) -> Result<String, String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())
}

/// Paragraph-by-paragraph run concatenation, one space after each paragraph.
fn extract_docx(bytes: &[u8]) -> Result<String, String> {
    let docx = read_docx(bytes).map_err(|e| e.to_string())?;

    let mut text = String::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push(' ');
        }
    }
    Ok(text)
}
