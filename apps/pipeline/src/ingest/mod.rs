// Resume ingestion: binary document formats in, lowercase plain text out.

pub mod extract;

pub use extract::{extract_document, ExtractionOutcome};
