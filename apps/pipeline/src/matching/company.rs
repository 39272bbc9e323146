//! Company Deduplicator — flags employer registrations that look like an
//! existing company.
//!
//! Exact email/website matches are normally also enforced by storage
//! uniqueness upstream; the output here is informational, surfaced as a
//! warning on the profile-completion screen rather than a hard gate.

use std::collections::BTreeSet;

use crate::models::EmployerView;

/// Returns the names of existing companies that collide with `candidate`:
/// same email, same website, or a company name whose case-insensitive
/// similarity ratio exceeds `name_threshold`.
///
/// `others` must not include the candidate's own record. Unset fields never
/// collide — two profiles without a website are not duplicates of each other.
pub fn detect_duplicate_companies(
    candidate: &EmployerView,
    others: &[EmployerView],
    name_threshold: f64,
) -> BTreeSet<String> {
    let mut duplicates = BTreeSet::new();

    for existing in others {
        let Some(existing_name) = existing.company_name.as_deref() else {
            // Nothing to report a collision against before the profile is
            // completed.
            continue;
        };

        let email_match = match (&candidate.company_email, &existing.company_email) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        let website_match = match (&candidate.company_website, &existing.company_website) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        let name_match = candidate
            .company_name
            .as_deref()
            .map(|name| name_similarity(name, existing_name) > name_threshold)
            .unwrap_or(false);

        if email_match || website_match || name_match {
            duplicates.insert(existing_name.to_string());
        }
    }

    duplicates
}

/// Case-insensitive similarity ratio in [0, 1].
fn name_similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn profile(name: Option<&str>, email: Option<&str>, website: Option<&str>) -> EmployerView {
        EmployerView {
            id: Uuid::new_v4(),
            company_name: name.map(String::from),
            company_email: email.map(String::from),
            company_website: website.map(String::from),
            created_at: Utc::now(),
        }
    }

    const THRESHOLD: f64 = 0.85;

    #[test]
    fn test_exact_website_match_collides() {
        let candidate = profile(
            Some("Acme Robotics"),
            Some("hr@acme.example"),
            Some("https://acme.example"),
        );
        let other = profile(
            Some("Totally Different Name"),
            Some("jobs@other.example"),
            Some("https://acme.example"),
        );

        let duplicates = detect_duplicate_companies(&candidate, &[other], THRESHOLD);
        assert!(duplicates.contains("Totally Different Name"));
    }

    #[test]
    fn test_exact_email_match_collides() {
        let candidate = profile(Some("Acme"), Some("hr@acme.example"), None);
        let other = profile(Some("Acme Europe"), Some("hr@acme.example"), None);

        let duplicates = detect_duplicate_companies(&candidate, &[other], THRESHOLD);
        assert_eq!(duplicates.len(), 1);
        assert!(duplicates.contains("Acme Europe"));
    }

    #[test]
    fn test_similar_name_collides_above_threshold() {
        let candidate = profile(Some("TechCorp Solutions"), None, None);
        let other = profile(Some("Techcorp Solution"), None, None);

        let duplicates = detect_duplicate_companies(&candidate, &[other], THRESHOLD);
        assert!(duplicates.contains("Techcorp Solution"));
    }

    #[test]
    fn test_unrelated_companies_do_not_collide() {
        let candidate = profile(
            Some("Acme Robotics"),
            Some("hr@acme.example"),
            Some("https://acme.example"),
        );
        let other = profile(
            Some("Blue Sky Catering"),
            Some("jobs@bluesky.example"),
            Some("https://bluesky.example"),
        );

        assert!(detect_duplicate_companies(&candidate, &[other], THRESHOLD).is_empty());
    }

    #[test]
    fn test_unset_fields_never_collide() {
        let candidate = profile(Some("Acme"), None, None);
        let other = profile(Some("Zenith Media"), None, None);

        // Both emails and websites unset: no exact collision, and the names
        // are far apart.
        assert!(detect_duplicate_companies(&candidate, &[other], THRESHOLD).is_empty());
    }

    #[test]
    fn test_duplicate_names_reported_once() {
        let candidate = profile(Some("Acme"), Some("hr@acme.example"), Some("https://acme.example"));
        // Same name collides by email AND website; the set deduplicates.
        let other = profile(Some("Acme Inc"), Some("hr@acme.example"), Some("https://acme.example"));

        let duplicates = detect_duplicate_companies(&candidate, &[other], THRESHOLD);
        assert_eq!(duplicates.len(), 1);
    }

    #[test]
    fn test_name_comparison_is_case_insensitive() {
        let candidate = profile(Some("ACME ROBOTICS"), None, None);
        let other = profile(Some("acme robotics"), None, None);

        let duplicates = detect_duplicate_companies(&candidate, &[other], THRESHOLD);
        assert!(duplicates.contains("acme robotics"));
    }
}
