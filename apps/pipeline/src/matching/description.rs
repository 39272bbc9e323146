//! Job description field parser.
//!
//! Postings embed `Job Type:` and `Work Mode:` lines in their free-text
//! description; the dashboard shows them as structured fields next to the
//! match results. Recomputed per render, nothing stored.

use regex::Regex;
use serde::{Deserialize, Serialize};

const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptionFields {
    pub job_type: String,
    pub work_mode: String,
    /// Description with the embedded field lines removed.
    pub clean_description: String,
}

/// Pulls `Job Type:` / `Work Mode:` out of a description, defaulting to
/// "Not specified" when a line is absent, and strips both lines from the
/// remaining text.
pub fn parse_description_fields(description: &str) -> JobDescriptionFields {
    // Fixed patterns; compilation cannot fail.
    let job_type_re = Regex::new(r"(?i)Job Type:[ \t]*(.*)").unwrap();
    let work_mode_re = Regex::new(r"(?i)Work Mode:[ \t]*(.*)").unwrap();
    let strip_re = Regex::new(r"(?i)(Job Type:.*|Work Mode:.*)").unwrap();

    JobDescriptionFields {
        job_type: capture_or_default(&job_type_re, description),
        work_mode: capture_or_default(&work_mode_re, description),
        clean_description: strip_re.replace_all(description, "").trim().to_string(),
    }
}

fn capture_or_default(pattern: &Regex, description: &str) -> String {
    pattern
        .captures(description)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_fields_extracted() {
        let fields = parse_description_fields(
            "Backend role building APIs.\nJob Type: Full-time\nWork Mode: Remote",
        );
        assert_eq!(fields.job_type, "Full-time");
        assert_eq!(fields.work_mode, "Remote");
    }

    #[test]
    fn test_missing_fields_default_to_not_specified() {
        let fields = parse_description_fields("Backend role building APIs.");
        assert_eq!(fields.job_type, "Not specified");
        assert_eq!(fields.work_mode, "Not specified");
        assert_eq!(fields.clean_description, "Backend role building APIs.");
    }

    #[test]
    fn test_field_labels_are_case_insensitive() {
        let fields = parse_description_fields("job type: Internship\nWORK MODE: Hybrid");
        assert_eq!(fields.job_type, "Internship");
        assert_eq!(fields.work_mode, "Hybrid");
    }

    #[test]
    fn test_clean_description_strips_field_lines() {
        let fields = parse_description_fields(
            "Build data pipelines.\nJob Type: Full-time\nWork Mode: On-site",
        );
        assert!(!fields.clean_description.contains("Job Type"));
        assert!(!fields.clean_description.contains("Work Mode"));
        assert!(fields.clean_description.contains("Build data pipelines."));
    }

    #[test]
    fn test_empty_value_after_label_defaults() {
        let fields = parse_description_fields("Job Type:\nWork Mode: Remote");
        assert_eq!(fields.job_type, "Not specified");
        assert_eq!(fields.work_mode, "Remote");
    }
}
