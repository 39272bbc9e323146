// Skill extraction: a fixed vocabulary with alias groups, and the two-tier
// normalizer that maps free text onto it.

pub mod normalizer;
pub mod vocabulary;

pub use normalizer::{extract_skills, fold_for_matching, SkillSet};
pub use vocabulary::SkillVocabulary;
