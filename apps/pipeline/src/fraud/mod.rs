// Resume fraud screening: exact duplicate detection by content digest, then
// corpus-wide originality scoring for everything that is not an exact copy.

pub mod digest;
pub mod originality;
pub mod stopwords;
pub mod tfidf;

pub use digest::content_digest;
pub use originality::{score_originality, OriginalityResult};
