//! Interactive menu loop and the "selected project" it carries between
//! operations.

mod handlers;
mod input;

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::core::{
    ProjectError, ProjectResult,
    db::{Project, ProjectRepository},
};

pub use input::InputCollector;

const OPERATIONS: [&str; 5] = [
    "1) Add a project",
    "2) List projects",
    "3) Select a project",
    "4) Update project details",
    "5) Delete a project",
];

enum Flow {
    Continue,
    Exit,
}

/// One run of the interactive loop.
pub struct Session<R, I, O> {
    repo: R,
    input: InputCollector<I, O>,
    selected: Option<Project>,
}

impl<R, I, O> Session<R, I, O>
where
    R: ProjectRepository,
    I: BufRead,
    O: Write,
{
    pub fn new(repo: R, input: I, output: O) -> Self {
        Self {
            repo,
            input: InputCollector::new(input, output),
            selected: None,
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn into_output(self) -> O {
        self.input.into_output()
    }

    /// Show the menu and handle selections until the operator quits.
    ///
    /// Failures from an operation are printed and the menu is shown again;
    /// only a broken terminal ends the loop with an error.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match self.process_selection().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(ProjectError::Io(e)) => return Err(e).context("Terminal I/O failed"),
                Err(e) => {
                    if e.is_storage_failure() {
                        tracing::warn!(error = %e, "storage failure");
                    } else {
                        tracing::debug!(error = %e, "operation rejected");
                    }
                    let message = e.to_string();
                    let out = self.input.output();
                    writeln!(out, "\nError: {}. Try again.", message.trim_end_matches('.'))?;
                    writeln!(out)?;
                }
            }
        }
    }

    async fn process_selection(&mut self) -> ProjectResult<Flow> {
        let selection = self.get_user_selection()?;
        tracing::debug!(?selection, "menu selection");

        match selection {
            None => {
                writeln!(self.input.output(), "\nExiting the menu.")?;
                return Ok(Flow::Exit);
            }
            Some(1) => self.create_project().await?,
            Some(2) => self.list_projects().await?,
            Some(3) => self.select_project().await?,
            Some(4) => self.update_project_details().await?,
            Some(5) => self.delete_project().await?,
            Some(n) => writeln!(
                self.input.output(),
                "\n{} is not a valid selection. Try again.",
                n
            )?,
        }
        Ok(Flow::Continue)
    }

    fn get_user_selection(&mut self) -> ProjectResult<Option<i64>> {
        self.print_operations()?;
        self.input.read_int("\nEnter a menu selection")
    }

    fn print_operations(&mut self) -> ProjectResult<()> {
        let out = self.input.output();
        writeln!(out, "\nThese are the available selections. Press the Enter key to quit:")?;
        for line in OPERATIONS {
            writeln!(out, "   {}", line)?;
        }

        match &self.selected {
            Some(project) => writeln!(out, "\nYou are working with project: {}", project)?,
            None => writeln!(out, "\nYou are not working with a project.")?,
        }
        Ok(())
    }
}
