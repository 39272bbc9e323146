use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An open job posting, joined upstream from the job and employer records.
///
/// Jobs the candidate already applied to are filtered out before the view
/// reaches the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobView {
    pub id: Uuid,
    pub title: String,
    pub company_name: String,
    /// Free-text skill list, e.g. "Python, Django / SQL".
    pub skills_required: String,
    /// Free-text description; may embed "Job Type:" and "Work Mode:" lines.
    pub description: String,
    pub posted_at: DateTime<Utc>,
}
