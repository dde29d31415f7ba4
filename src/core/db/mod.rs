mod model;
mod project;
mod state;

use std::{path::Path, sync::Arc};

use state::DbState;

use crate::core::error::{ProjectError, ProjectResult};

pub use model::{Hours, ParseHoursError};
pub use project::{NewProject, OrNone, Project, ProjectRepository};

const MIN_DIFFICULTY: i64 = 1;
const MAX_DIFFICULTY: i64 = 5;

#[derive(Debug, Clone)]
pub struct ProjectDb {
    state: Arc<DbState>,
}

impl ProjectDb {
    pub async fn new<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        let state = DbState::new(db_file).await?;
        tracing::info!(db_file = ?state.db_file(), "opened project database");
        Ok(Self {
            state: Arc::new(state),
        })
    }

    /// Explicitly close the database. Further queries fail afterwards.
    pub async fn close(&self) -> anyhow::Result<()> {
        self.state.close().await?;
        tracing::info!(db_file = ?self.state.db_file(), "closed project database");
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRecord {
    id: i64,
    name: String,
    estimated_hours: Option<i64>,
    actual_hours: Option<i64>,
    difficulty: Option<i64>,
    notes: Option<String>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ProjectError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let hours = |value: Option<i64>| {
            value
                .map(Hours::try_from)
                .transpose()
                .map_err(|e| ProjectError::Service(e.to_string()))
        };
        Ok(Project {
            id: record.id,
            name: record.name,
            estimated_hours: hours(record.estimated_hours)?,
            actual_hours: hours(record.actual_hours)?,
            difficulty: record.difficulty,
            notes: record.notes,
        })
    }
}

fn validate(name: Option<&str>, difficulty: Option<i64>) -> ProjectResult<()> {
    if name.is_none_or(str::is_empty) {
        return Err(ProjectError::Validation("Project name is required.".into()));
    }
    if let Some(difficulty) = difficulty {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ProjectError::Validation(format!(
                "Difficulty must be between {} and {}.",
                MIN_DIFFICULTY, MAX_DIFFICULTY
            )));
        }
    }
    Ok(())
}

impl ProjectRepository for ProjectDb {
    async fn add_project(&self, project: &NewProject) -> ProjectResult<Project> {
        validate(project.name.as_deref(), project.difficulty)?;
        let mut conn = self.state.conn().await?;
        let record: ProjectRecord = sqlx::query_as(
            r#"INSERT INTO project (name, estimated_hours, actual_hours, difficulty, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, estimated_hours, actual_hours, difficulty, notes"#,
        )
        .bind(&project.name)
        .bind(project.estimated_hours.map(i64::from))
        .bind(project.actual_hours.map(i64::from))
        .bind(project.difficulty)
        .bind(&project.notes)
        .fetch_one(&mut *conn)
        .await?;
        tracing::debug!(id = record.id, "inserted project");
        record.try_into()
    }

    async fn fetch_all_projects(&self) -> ProjectResult<Vec<Project>> {
        let mut conn = self.state.conn().await?;
        sqlx::query_as::<_, ProjectRecord>(
            r#"SELECT id, name, estimated_hours, actual_hours, difficulty, notes
            FROM project
            ORDER BY name ASC, id ASC"#,
        )
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .map(Project::try_from)
        .collect()
    }

    async fn fetch_project_by_id(&self, id: i64) -> ProjectResult<Option<Project>> {
        let mut conn = self.state.conn().await?;
        sqlx::query_as::<_, ProjectRecord>(
            r#"SELECT id, name, estimated_hours, actual_hours, difficulty, notes
            FROM project
            WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .map(Project::try_from)
        .transpose()
    }

    async fn modify_project_details(&self, project: &Project) -> ProjectResult<()> {
        validate(Some(project.name.as_str()), project.difficulty)?;
        let mut conn = self.state.conn().await?;
        let updated: Option<i64> = sqlx::query_scalar(
            r#"UPDATE project SET
                name = $1,
                estimated_hours = $2,
                actual_hours = $3,
                difficulty = $4,
                notes = $5
            WHERE id = $6
            RETURNING id"#,
        )
        .bind(&project.name)
        .bind(project.estimated_hours.map(i64::from))
        .bind(project.actual_hours.map(i64::from))
        .bind(project.difficulty)
        .bind(&project.notes)
        .bind(project.id)
        .fetch_optional(&mut *conn)
        .await?;
        match updated {
            Some(_) => {
                tracing::debug!(id = project.id, "updated project");
                Ok(())
            }
            None => Err(ProjectError::NotFound(project.id)),
        }
    }

    async fn delete_project(&self, id: i64) -> ProjectResult<()> {
        let mut conn = self.state.conn().await?;
        let deleted = sqlx::query(r#"DELETE FROM project WHERE id = $1"#)
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(ProjectError::NotFound(id));
        }
        tracing::debug!(id, "deleted project");
        Ok(())
    }
}
