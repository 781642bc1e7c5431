pub mod resume;
pub mod response;

pub use resume::{ListField, Project, ProjectField, ResumeData, ResumeId, ScalarField, StoredResume};
pub use response::HealthResponse;
