//! Job Matcher — skill-set intersection between a candidate and a posting.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::skills::SkillSet;

/// Match outcome for one job. Ephemeral: recomputed on every dashboard
/// render, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: Uuid,
    /// Skills shared by candidate and posting, alphabetically ordered.
    pub matched_skills: SkillSet,
    /// A job is worth recommending iff at least one skill overlaps.
    pub is_recommendable: bool,
}

/// Parses a job's free-text requirement field into a skill set.
///
/// The field is comma-separated by convention, but slashes show up in
/// practice ("Python, Django / SQL"), so both delimit. Tokens are trimmed,
/// lowercased, and empties discarded.
pub fn parse_job_skills(raw: &str) -> SkillSet {
    raw.replace('/', ",")
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Intersects the candidate's case-folded skill set with a job's declared
/// requirements. No ranking beyond inclusion: the caller may present the
/// matched-skill count as a relevance signal, but the matcher itself only
/// decides in or out.
pub fn match_job(candidate_skills: &SkillSet, job_id: Uuid, skills_required: &str) -> MatchResult {
    let job_skills = parse_job_skills(skills_required);
    let matched_skills: SkillSet = candidate_skills
        .intersection(&job_skills)
        .cloned()
        .collect();

    MatchResult {
        job_id,
        is_recommendable: !matched_skills.is_empty(),
        matched_skills,
    }
}
