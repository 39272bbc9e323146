use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employer profile as stored upstream.
///
/// Profiles are created empty at registration and completed later, so the
/// company fields are optional until then.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerView {
    pub id: Uuid,
    pub company_name: Option<String>,
    pub company_email: Option<String>,
    pub company_website: Option<String>,
    pub created_at: DateTime<Utc>,
}
