//! Skill Normalizer — maps extracted resume (or job) text onto the canonical
//! vocabulary.
//!
//! Two tiers with different matching rules. Dictionary terms must sit on word
//! boundaries: "go" never matches inside "going". Alias surface forms are
//! matched as plain substrings, since boundary patterns break on tokens like
//! "c++" or ".net". The first alias hit claims the canonical skill and ends
//! that group's scan.

use std::collections::BTreeSet;

use crate::skills::vocabulary::SkillVocabulary;

/// A deduplicated set of canonical skills. BTreeSet keeps iteration in
/// stable alphabetical order regardless of match order.
pub type SkillSet = BTreeSet<String>;

/// Extracts the canonical skill set for a piece of text.
///
/// Empty text yields an empty set; so does text that matches nothing — a
/// vocabulary miss is a valid result, not an error.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> SkillSet {
    let mut detected = SkillSet::new();
    if text.trim().is_empty() {
        return detected;
    }
    let text = text.to_lowercase();

    for term in vocabulary.dictionary() {
        if term.pattern.is_match(&text) {
            detected.insert(term.canonical.clone());
        }
    }

    for group in vocabulary.alias_groups() {
        for alias in &group.aliases {
            if text.contains(alias.as_str()) {
                detected.insert(group.canonical.clone());
                break;
            }
        }
    }

    detected
}

/// Case-folds a skill set for matching. Canonical alias-group names keep
/// their registered form for presentation ("C# / .NET"); intersection with
/// job requirements happens on the folded tokens.
pub fn fold_for_matching(skills: &SkillSet) -> SkillSet {
    skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}
