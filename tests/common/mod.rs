mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from projects for tests
pub use projects::{Hours, NewProject, Project, ProjectDb, ProjectError, ProjectRepository};
