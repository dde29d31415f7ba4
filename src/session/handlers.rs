use std::io::{BufRead, Write};

use crate::core::{
    ProjectError, ProjectResult,
    db::{NewProject, OrNone, Project, ProjectRepository},
};

use super::Session;

impl<R, I, O> Session<R, I, O>
where
    R: ProjectRepository,
    I: BufRead,
    O: Write,
{
    pub(super) async fn create_project(&mut self) -> ProjectResult<()> {
        let name = self.input.read_line("\nEnter the project name")?;
        let estimated_hours = self.input.read_decimal("\nEnter the estimated hours")?;
        let actual_hours = self.input.read_decimal("\nEnter the actual hours")?;
        let difficulty = self.input.read_int("\nEnter the project difficulty (1-5)")?;
        let notes = self.input.read_line("\nEnter the project notes")?;

        let project = NewProject {
            name,
            estimated_hours,
            actual_hours,
            difficulty,
            notes,
        };

        let db_project = self.repo.add_project(&project).await?;
        tracing::info!(id = db_project.id, "created project");
        writeln!(
            self.input.output(),
            "\nYou have successfully created project: {}",
            db_project
        )?;
        Ok(())
    }

    pub(super) async fn list_projects(&mut self) -> ProjectResult<()> {
        let projects = self.repo.fetch_all_projects().await?;

        let out = self.input.output();
        writeln!(out, "\nProjects:")?;
        for project in &projects {
            writeln!(out, "     {}: {}", project.id, project.name)?;
        }
        Ok(())
    }

    pub(super) async fn select_project(&mut self) -> ProjectResult<()> {
        self.list_projects().await?;

        let project_id = self.input.read_int("\nEnter a project ID to select a project")?;

        self.selected = None;
        let Some(project_id) = project_id else {
            return Ok(());
        };

        self.selected = self.repo.fetch_project_by_id(project_id).await?;
        if self.selected.is_none() {
            writeln!(self.input.output(), "\nProject {} was not found.", project_id)?;
        }
        Ok(())
    }

    /// Prompt for every field with the current value as the default. The
    /// selection is then replaced by the stored record, never edited in place.
    pub(super) async fn update_project_details(&mut self) -> ProjectResult<()> {
        let Some(current) = self.selected.clone() else {
            writeln!(self.input.output(), "\nPlease select a project.")?;
            return Ok(());
        };

        let name = self
            .input
            .read_line(&format!("\nEnter the project name [{}]", current.name))?;
        let estimated_hours = self.input.read_decimal(&format!(
            "\nEnter the estimated hours [{}]",
            OrNone(&current.estimated_hours)
        ))?;
        let actual_hours = self.input.read_decimal(&format!(
            "\nEnter the actual hours [{}]",
            OrNone(&current.actual_hours)
        ))?;
        let difficulty = self.input.read_int(&format!(
            "\nEnter the project difficulty (1-5) [{}]",
            OrNone(&current.difficulty)
        ))?;
        let notes = self.input.read_line(&format!(
            "\nEnter the project notes [{}]",
            OrNone(&current.notes)
        ))?;

        let project = Project {
            id: current.id,
            name: name.unwrap_or(current.name),
            estimated_hours: estimated_hours.or(current.estimated_hours),
            actual_hours: actual_hours.or(current.actual_hours),
            difficulty: difficulty.or(current.difficulty),
            notes: notes.or(current.notes),
        };

        self.repo.modify_project_details(&project).await?;
        tracing::info!(id = project.id, "updated project");
        self.selected = self.repo.fetch_project_by_id(project.id).await?;
        Ok(())
    }

    pub(super) async fn delete_project(&mut self) -> ProjectResult<()> {
        self.list_projects().await?;

        let project_id = self
            .input
            .read_int("\nEnter the project ID to delete")?
            .ok_or_else(|| ProjectError::Validation("A project ID is required.".into()))?;

        self.repo.delete_project(project_id).await?;
        tracing::info!(id = project_id, "deleted project");
        writeln!(
            self.input.output(),
            "\nProject {} was successfully deleted.",
            project_id
        )?;

        if self.selected.as_ref().is_some_and(|p| p.id == project_id) {
            self.selected = None;
        }
        Ok(())
    }
}
