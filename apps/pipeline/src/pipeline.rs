//! Orchestrated flows: upload screening and dashboard recommendation.
//!
//! These mirror how the surrounding application drives the pipeline. On
//! upload, the cheap digest check runs first and an exact duplicate skips
//! the corpus-wide originality scan entirely. On dashboard render, the
//! resume is re-extracted and re-normalized from source, then intersected
//! against every open job. Both entry points are synchronous and stateless;
//! the caller persists whatever it wants to keep.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::fraud::{content_digest, score_originality, OriginalityResult};
use crate::ingest::extract_document;
use crate::matching::{match_job, parse_description_fields, JobDescriptionFields, MatchResult};
use crate::models::{JobView, PeerResume, ResumeDocument};
use crate::skills::{extract_skills, fold_for_matching, SkillSet, SkillVocabulary};

/// Warning stored on the candidate's profile when an exact duplicate is
/// found. Job recommendations stay blocked until a different resume is
/// uploaded; the upload itself still goes through.
pub const DUPLICATE_RESUME_WARNING: &str =
    "This resume matches another student's resume. Job recommendations are blocked.";

/// Result of screening one upload.
#[derive(Debug, Serialize)]
pub struct UploadScreening {
    /// SHA-256 hex digest to store on the candidate's profile.
    pub digest: String,
    pub originality: OriginalityResult,
    /// Set only for exact duplicates.
    pub warning: Option<String>,
}

/// Screens a freshly uploaded resume against every other candidate's stored
/// resume. `peers` must exclude the uploader's own prior record — replacing
/// your own resume with itself is not plagiarism.
pub fn screen_upload(
    document: &ResumeDocument,
    peers: &[PeerResume],
    config: &PipelineConfig,
) -> UploadScreening {
    let digest = content_digest(&document.bytes);

    // Exact check first: byte-identical content needs no vectorization.
    if let Some(peer) = peers.iter().find(|peer| peer.digest == digest) {
        info!(candidate_id = %peer.candidate_id, "exact duplicate resume detected");
        return UploadScreening {
            digest,
            originality: OriginalityResult {
                similarity_score: 100.0,
                is_flagged: true,
            },
            warning: Some(DUPLICATE_RESUME_WARNING.to_string()),
        };
    }

    let current_text = extract_with_log(document);
    let peer_texts: Vec<String> = peers
        .iter()
        .map(|peer| extract_with_log(&peer.document))
        .collect();

    let originality = score_originality(&current_text, &peer_texts, config.fraud_threshold);
    debug!(
        score = originality.similarity_score,
        flagged = originality.is_flagged,
        peers = peers.len(),
        "originality scan complete"
    );

    UploadScreening {
        digest,
        originality,
        warning: None,
    }
}

/// One recommendable job, with the skills that earned the recommendation
/// and the parsed description fields for display.
#[derive(Debug, Serialize)]
pub struct JobRecommendation {
    pub job: JobView,
    pub matched: MatchResult,
    pub fields: JobDescriptionFields,
}

/// Everything the dashboard needs: the candidate's skill set (canonical
/// forms, for display) and the jobs worth recommending.
#[derive(Debug, Serialize)]
pub struct DashboardRecommendations {
    pub skills: SkillSet,
    pub recommendations: Vec<JobRecommendation>,
}

/// Builds the dashboard view for one candidate. `open_jobs` must already
/// exclude jobs the candidate applied to — that filter belongs upstream.
///
/// An unreadable resume degrades to an empty skill set and therefore zero
/// recommendations; the render still succeeds.
pub fn recommend_jobs(
    document: &ResumeDocument,
    vocabulary: &SkillVocabulary,
    open_jobs: &[JobView],
) -> DashboardRecommendations {
    let text = extract_with_log(document);
    let skills = extract_skills(&text, vocabulary);
    let matchable = fold_for_matching(&skills);

    let mut recommendations = Vec::new();
    for job in open_jobs {
        let matched = match_job(&matchable, job.id, &job.skills_required);
        if !matched.is_recommendable {
            continue;
        }
        recommendations.push(JobRecommendation {
            fields: parse_description_fields(&job.description),
            job: job.clone(),
            matched,
        });
    }

    debug!(
        skills = skills.len(),
        recommended = recommendations.len(),
        considered = open_jobs.len(),
        "dashboard recommendations built"
    );

    DashboardRecommendations {
        skills,
        recommendations,
    }
}

fn extract_with_log(document: &ResumeDocument) -> String {
    let outcome = extract_document(document);
    if let Some(error) = outcome.failure() {
        warn!(file = %document.file_name, %error, "resume text extraction failed; treating as empty");
    }
    outcome.into_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use docx_rs::{Docx, Paragraph, Run};
    use uuid::Uuid;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("placement_pipeline=debug")
            .try_init();
    }

    fn docx_resume(file_name: &str, paragraphs: &[&str]) -> ResumeDocument {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut cursor = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        ResumeDocument::new(file_name, cursor.into_inner())
    }

    fn peer(document: ResumeDocument) -> PeerResume {
        PeerResume {
            candidate_id: Uuid::new_v4(),
            digest: content_digest(&document.bytes),
            document,
        }
    }

    fn job(skills_required: &str, description: &str) -> JobView {
        JobView {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            company_name: "Acme Robotics".to_string(),
            skills_required: skills_required.to_string(),
            description: description.to_string(),
            posted_at: Utc::now(),
        }
    }

    #[test]
    fn test_first_upload_in_system_is_clean() {
        let document = docx_resume("a.docx", &["python developer"]);
        let screening = screen_upload(&document, &[], &PipelineConfig::default());

        assert_eq!(screening.originality, OriginalityResult::clean());
        assert!(screening.warning.is_none());
        assert_eq!(screening.digest.len(), 64);
    }

    #[test]
    fn test_byte_identical_upload_short_circuits_as_duplicate() {
        let document = docx_resume("mine.docx", &["python developer django"]);
        // Same bytes stored under a different peer file name.
        let existing = peer(ResumeDocument::new("theirs.docx", document.bytes.clone()));

        let screening = screen_upload(&document, &[existing], &PipelineConfig::default());
        assert_eq!(screening.originality.similarity_score, 100.0);
        assert!(screening.originality.is_flagged);
        assert_eq!(screening.warning.as_deref(), Some(DUPLICATE_RESUME_WARNING));
    }

    #[test]
    fn test_same_text_different_bytes_is_flagged_by_originality() {
        let document = docx_resume("mine.docx", &["python developer django flask"]);
        let restyled = docx_resume("theirs.docx", &["python developer", "django flask"]);
        assert_ne!(content_digest(&document.bytes), content_digest(&restyled.bytes));

        let screening = screen_upload(&document, &[peer(restyled)], &PipelineConfig::default());
        assert!(screening.originality.is_flagged);
        assert_eq!(screening.originality.similarity_score, 100.0);
        // Only exact duplicates carry the blocking warning.
        assert!(screening.warning.is_none());
    }

    #[test]
    fn test_unrelated_peer_does_not_flag() {
        let document = docx_resume("mine.docx", &["python developer django flask"]);
        let other = docx_resume("theirs.docx", &["pastry chef croissant lamination"]);

        let screening = screen_upload(&document, &[peer(other)], &PipelineConfig::default());
        assert!(!screening.originality.is_flagged);
        assert!(screening.warning.is_none());
    }

    #[test]
    fn test_unreadable_upload_is_screened_not_rejected() {
        init_tracing();
        let document = ResumeDocument::new("mine.docx", b"not a zip".to_vec());
        let other = docx_resume("theirs.docx", &["python developer"]);

        let screening = screen_upload(&document, &[peer(other)], &PipelineConfig::default());
        // Degrades to empty text: zero similarity, digest still recorded.
        assert_eq!(screening.originality, OriginalityResult::clean());
        assert_eq!(screening.digest, content_digest(b"not a zip"));
    }

    #[test]
    fn test_recommendations_intersect_per_job() {
        let resume = docx_resume("mine.docx", &["I know Python and SQL"]);
        let vocabulary = SkillVocabulary::builtin();
        let jobs = vec![
            job("Python, Django, SQL", "APIs.\nJob Type: Full-time\nWork Mode: Remote"),
            job("Java / Spring", "JVM services."),
        ];

        let dashboard = recommend_jobs(&resume, &vocabulary, &jobs);
        assert!(dashboard.skills.contains("python"));
        assert!(dashboard.skills.contains("sql"));
        assert_eq!(dashboard.recommendations.len(), 1);

        let rec = &dashboard.recommendations[0];
        assert_eq!(rec.matched.matched_skills.len(), 2);
        assert!(rec.matched.matched_skills.contains("python"));
        assert!(rec.matched.matched_skills.contains("sql"));
        assert_eq!(rec.fields.job_type, "Full-time");
        assert_eq!(rec.fields.work_mode, "Remote");
    }

    #[test]
    fn test_unreadable_resume_yields_no_recommendations() {
        let resume = ResumeDocument::new("mine.pdf", b"garbage".to_vec());
        let vocabulary = SkillVocabulary::builtin();
        let jobs = vec![job("Python, SQL", "Data work.")];

        let dashboard = recommend_jobs(&resume, &vocabulary, &jobs);
        assert!(dashboard.skills.is_empty());
        assert!(dashboard.recommendations.is_empty());
    }

    #[test]
    fn test_no_open_jobs_yields_no_recommendations() {
        let resume = docx_resume("mine.docx", &["python"]);
        let dashboard = recommend_jobs(&resume, &SkillVocabulary::builtin(), &[]);
        assert!(dashboard.recommendations.is_empty());
    }
}
