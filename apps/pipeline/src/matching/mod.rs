// Candidate-to-job matching and employer duplicate detection.

pub mod company;
pub mod description;
pub mod jobs;

pub use company::detect_duplicate_companies;
pub use description::{parse_description_fields, JobDescriptionFields};
pub use jobs::{match_job, parse_job_skills, MatchResult};
