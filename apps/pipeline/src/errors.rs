use thiserror::Error;

use crate::models::DocumentFormat;

/// Pipeline-level error type.
///
/// Both variants describe extraction problems, and neither is fatal to the
/// surrounding flow: `ExtractionOutcome` carries them to the orchestration
/// seams, where they degrade to empty text after a log line. An unreadable
/// resume yields zero skills and zero recommendations, not a failed upload.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("unsupported resume format: {0}")]
    UnsupportedFormat(String),

    #[error("unreadable {format} document: {reason}")]
    Extraction {
        format: DocumentFormat,
        reason: String,
    },
}
