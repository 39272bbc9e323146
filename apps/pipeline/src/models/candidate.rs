use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resume file formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves a format from a stored file name. Case-insensitive, extension
    /// only — the rest of the name carries no signal.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Docx => write!(f, "docx"),
        }
    }
}

/// An uploaded resume: raw bytes plus the file name it was stored under.
///
/// The content digest is computed from `bytes` alone; the file name never
/// participates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_file_name(&self.file_name)
    }
}

/// Another candidate's stored resume, as seen during upload screening.
///
/// The caller assembles these for every *other* candidate with a resume on
/// file — the uploader's own prior record is excluded upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerResume {
    pub candidate_id: Uuid,
    /// SHA-256 hex digest recorded when this peer uploaded.
    pub digest: String,
    pub document: ResumeDocument,
}
