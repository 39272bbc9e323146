//! Resume ingestion and matching pipeline for a campus-placement system.
//!
//! The surrounding application owns registration, persistence, and rendering;
//! it hands this crate read-only profile/job views and stores what comes back:
//! canonical skill sets, content digests, originality scores, fraud flags, and
//! per-job match results. Everything here is synchronous and side-effect-free
//! apart from `tracing` output.

pub mod config;
pub mod errors;
pub mod fraud;
pub mod ingest;
pub mod matching;
pub mod models;
pub mod pipeline;
pub mod skills;

pub use config::PipelineConfig;
pub use errors::PipelineError;
pub use fraud::{content_digest, score_originality, OriginalityResult};
pub use ingest::{extract_document, ExtractionOutcome};
pub use matching::{detect_duplicate_companies, match_job, parse_job_skills, MatchResult};
pub use models::{DocumentFormat, EmployerView, JobView, PeerResume, ResumeDocument};
pub use pipeline::{
    recommend_jobs, screen_upload, DashboardRecommendations, JobRecommendation, UploadScreening,
    DUPLICATE_RESUME_WARNING,
};
pub use skills::{extract_skills, SkillSet, SkillVocabulary};
