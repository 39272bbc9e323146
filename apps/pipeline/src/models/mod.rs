// Read-only joined views exchanged with the surrounding application.
// The pipeline never walks a live object graph: whatever it needs from the
// candidate/job/employer records arrives flattened into these DTOs.

pub mod candidate;
pub mod employer;
pub mod job;

pub use candidate::{DocumentFormat, PeerResume, ResumeDocument};
pub use employer::EmployerView;
pub use job::JobView;
