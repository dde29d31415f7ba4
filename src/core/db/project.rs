use std::fmt;

use crate::core::{db::model::Hours, error::ProjectResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i64>,
    pub notes: Option<String>,
}

/// A project that has not been stored yet. Fields are kept exactly as
/// entered; the store decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: Option<String>,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i64>,
    pub notes: Option<String>,
}

/// Renders an optional value, or `none` when it is absent.
pub struct OrNone<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNone<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("none"),
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Project(id={}, name={}, estimated_hours={}, actual_hours={}, difficulty={}, notes={})",
            self.id,
            self.name,
            OrNone(&self.estimated_hours),
            OrNone(&self.actual_hours),
            OrNone(&self.difficulty),
            OrNone(&self.notes),
        )
    }
}

pub trait ProjectRepository {
    fn add_project(&self, project: &NewProject) -> impl Future<Output = ProjectResult<Project>>;
    fn fetch_all_projects(&self) -> impl Future<Output = ProjectResult<Vec<Project>>>;
    fn fetch_project_by_id(&self, id: i64) -> impl Future<Output = ProjectResult<Option<Project>>>;
    fn modify_project_details(&self, project: &Project) -> impl Future<Output = ProjectResult<()>>;
    fn delete_project(&self, id: i64) -> impl Future<Output = ProjectResult<()>>;
}
